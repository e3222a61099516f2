use serde::{Deserialize, Serialize};

use crate::core::{Margins, SCORE_MAX, SCORE_MIN, Viewport};
use crate::interaction::{EntranceTiming, TooltipBehavior};
use crate::render::Color;

/// Visual constants of the scatter view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterStyle {
    pub mark_radius: f64,
    pub hover_radius: f64,
    pub mark_opacity: f64,
    pub label_offset_x: f64,
    pub label_offset_y: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub grid_opacity: f64,
    pub grid_dash_px: f64,
    pub tick_size_px: f64,
    pub category_font_size_px: f64,
    pub x_category_padding_px: f64,
    pub y_category_padding_px: f64,
    pub axis_title_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_offset_px: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            mark_radius: 10.0,
            hover_radius: 12.0,
            mark_opacity: 0.9,
            label_offset_x: 14.0,
            label_offset_y: 10.0,
            label_font_size_px: 13.0,
            label_color: Color::rgb8(0x33, 0x33, 0x33),
            axis_color: Color::BLACK,
            axis_line_width: 1.0,
            grid_opacity: 0.3,
            grid_dash_px: 3.0,
            tick_size_px: 6.0,
            category_font_size_px: 11.0,
            x_category_padding_px: 15.0,
            y_category_padding_px: 15.0,
            axis_title_font_size_px: 12.0,
            axis_title_color: Color::rgb8(0x33, 0x33, 0x33),
            axis_title_offset_px: 65.0,
            x_axis_title: "Gleam (shimmer & movement)".to_owned(),
            y_axis_title: "Luminosity (brightness)".to_owned(),
        }
    }
}

/// Bootstrap configuration of one scatter view instance.
///
/// Serializable so hosts can keep the chart setup next to their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterViewConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_score_domain")]
    pub x_domain: (f64, f64),
    #[serde(default = "default_score_domain")]
    pub y_domain: (f64, f64),
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: i64,
    #[serde(default)]
    pub initial_step: i64,
    #[serde(default)]
    pub style: ScatterStyle,
    #[serde(default)]
    pub timing: EntranceTiming,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
}

impl Default for ScatterViewConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: default_margins(),
            x_domain: default_score_domain(),
            y_domain: default_score_domain(),
            reveal_threshold: default_reveal_threshold(),
            initial_step: 0,
            style: ScatterStyle::default(),
            timing: EntranceTiming::default(),
            tooltip: TooltipBehavior::default(),
        }
    }
}

impl ScatterViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domains(mut self, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        self.x_domain = x_domain;
        self.y_domain = y_domain;
        self
    }

    #[must_use]
    pub fn with_reveal_threshold(mut self, reveal_threshold: i64) -> Self {
        self.reveal_threshold = reveal_threshold;
        self
    }

    #[must_use]
    pub fn with_initial_step(mut self, initial_step: i64) -> Self {
        self.initial_step = initial_step;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ScatterStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: EntranceTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipBehavior) -> Self {
        self.tooltip = tooltip;
        self
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 600)
}

fn default_margins() -> Margins {
    Margins::new(40.0, 110.0, 90.0, 110.0)
}

fn default_score_domain() -> (f64, f64) {
    (SCORE_MIN, SCORE_MAX)
}

fn default_reveal_threshold() -> i64 {
    2
}
