use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BandScale, ChartGeometry, LinearScale, Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::TermPalette;

// d3 axis label spacing: tick size + 3px padding.
const AXIS_LABEL_GAP_PX: f64 = 3.0;

/// Upper bound on numeric y ticks (`y_max / y_tick_step`).
const MAX_VALUE_TICKS: usize = 1000;

/// One category of the colour-mention bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    #[serde(rename = "colours")]
    pub colour: String,
    #[serde(rename = "number_of_times")]
    pub count: f64,
}

impl BarRecord {
    #[must_use]
    pub fn new(colour: impl Into<String>, count: f64) -> Self {
        Self {
            colour: colour.into(),
            count,
        }
    }
}

/// Parses a JSON array of bar records.
pub fn bar_records_from_json_str(input: &str) -> ChartResult<Vec<BarRecord>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::DataLoad(format!("failed to parse bar chart data: {e}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_bar_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_bar_margins")]
    pub margins: Margins,
    #[serde(default = "default_y_max")]
    pub y_max: f64,
    #[serde(default = "default_y_tick_step")]
    pub y_tick_step: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_tick_size")]
    pub tick_size_px: f64,
    #[serde(default = "default_tick_font_size")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size_px: f64,
    #[serde(default = "default_x_title")]
    pub x_title: String,
    #[serde(default = "default_x_title_font_size")]
    pub x_title_font_size_px: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_bar_viewport(),
            margins: default_bar_margins(),
            y_max: default_y_max(),
            y_tick_step: default_y_tick_step(),
            band_padding: default_band_padding(),
            tick_size_px: default_tick_size(),
            tick_font_size_px: default_tick_font_size(),
            axis_color: default_axis_color(),
            title: default_title(),
            title_font_size_px: default_title_font_size(),
            x_title: default_x_title(),
            x_title_font_size_px: default_x_title_font_size(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_y_max(mut self, y_max: f64) -> Self {
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self
    }

    fn validate(&self) -> ChartResult<()> {
        if !self.y_max.is_finite() || self.y_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar chart y max must be finite and > 0".to_owned(),
            ));
        }
        if !self.y_tick_step.is_finite() || self.y_tick_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar chart y tick step must be finite and > 0".to_owned(),
            ));
        }
        if self.y_max / self.y_tick_step > MAX_VALUE_TICKS as f64 {
            return Err(ChartError::InvalidData(format!(
                "bar chart y max / tick step must not exceed {MAX_VALUE_TICKS} ticks"
            )));
        }
        if !self.tick_size_px.is_finite() || self.tick_size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "bar chart tick size must be finite and >= 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("tick font size", self.tick_font_size_px),
            ("title font size", self.title_font_size_px),
            ("x title font size", self.x_title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar chart {name} must be finite and > 0"
                )));
            }
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "bar chart band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        self.axis_color.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub colour: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub geometry: ChartGeometry,
    pub bars: Vec<BarGeometry>,
    pub axis_lines: Vec<LinePrimitive>,
    pub axis_texts: Vec<TextPrimitive>,
    pub titles: Vec<TextPrimitive>,
}

impl BarLayout {
    #[must_use]
    pub fn bar(&self, colour: &str) -> Option<&BarGeometry> {
        self.bars.iter().find(|bar| bar.colour == colour)
    }

    #[must_use]
    pub fn to_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.geometry.viewport());
        for bar in &self.bars {
            frame.push_rect(
                CanvasLayerKind::Marks,
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, bar.fill),
            );
        }
        for line in &self.axis_lines {
            frame.push_line(CanvasLayerKind::Axis, *line);
        }
        for text in self.axis_texts.iter().chain(&self.titles) {
            frame.push_text(CanvasLayerKind::Axis, text.clone());
        }
        frame
    }
}

/// Lays out one bar per record over a padded band scale, with counts on an
/// inverted `[0, y_max]` scale.
pub fn compute_bar_layout(
    records: &[BarRecord],
    config: &BarChartConfig,
    palette: &TermPalette,
) -> ChartResult<BarLayout> {
    config.validate()?;
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !record.count.is_finite() || record.count < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "count for `{}` must be finite and >= 0",
                record.colour
            )));
        }
        if !seen.insert(record.colour.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate bar category `{}`",
                record.colour
            )));
        }
    }

    let geometry = ChartGeometry::new(config.viewport, config.margins)?;
    let plot = geometry.plot_rect();
    let x_scale = BandScale::new(
        records.iter().map(|record| record.colour.clone()),
        (plot.left, plot.right()),
        config.band_padding,
    )?;
    let y_scale = LinearScale::new((0.0, config.y_max), (plot.bottom(), plot.top))?;

    let mut bars = Vec::with_capacity(records.len());
    for record in records {
        let Some(x) = x_scale.position(&record.colour) else {
            continue;
        };
        let y = y_scale.map(record.count)?;
        let fill = palette.get(&record.colour).unwrap_or_else(|| {
            debug!(colour = %record.colour, "bar colour missing from palette, using fallback");
            palette.fallback()
        });
        bars.push(BarGeometry {
            colour: record.colour.clone(),
            x,
            y,
            width: x_scale.bandwidth(),
            height: plot.bottom() - y,
            fill,
        });
    }

    let axis = config.axis_color;
    let tick = config.tick_size_px;
    let label_offset = tick + AXIS_LABEL_GAP_PX;
    let mut axis_lines = vec![
        LinePrimitive::new(plot.left, plot.bottom(), plot.right(), plot.bottom(), 1.0, axis),
        LinePrimitive::new(plot.left, plot.top, plot.left, plot.bottom(), 1.0, axis),
    ];
    let mut axis_texts = Vec::new();

    for colour in x_scale.categories() {
        let Some(x) = x_scale.position(colour) else {
            continue;
        };
        let center = x + x_scale.bandwidth() / 2.0;
        axis_lines.push(LinePrimitive::new(
            center,
            plot.bottom(),
            center,
            plot.bottom() + tick,
            1.0,
            axis,
        ));
        axis_texts.push(TextPrimitive::new(
            colour,
            center,
            plot.bottom() + label_offset + 0.71 * config.tick_font_size_px,
            config.tick_font_size_px,
            axis,
            TextHAlign::Center,
        ));
    }

    let tick_count = (config.y_max / config.y_tick_step).floor() as usize;
    for index in 0..=tick_count {
        let value = index as f64 * config.y_tick_step;
        let y = y_scale.map(value)?;
        axis_lines.push(LinePrimitive::new(plot.left - tick, y, plot.left, y, 1.0, axis));
        axis_texts.push(TextPrimitive::new(
            format_tick_value(value),
            plot.left - label_offset,
            y + 0.32 * config.tick_font_size_px,
            config.tick_font_size_px,
            axis,
            TextHAlign::Right,
        ));
    }

    let mut titles = Vec::new();
    if !config.title.is_empty() {
        titles.push(TextPrimitive::new(
            config.title.clone(),
            0.0,
            15.0,
            config.title_font_size_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
    if !config.x_title.is_empty() {
        titles.push(TextPrimitive::new(
            config.x_title.clone(),
            f64::from(config.viewport.width) / 2.0,
            f64::from(config.viewport.height) - 10.0,
            config.x_title_font_size_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }

    Ok(BarLayout {
        geometry,
        bars,
        axis_lines,
        axis_texts,
        titles,
    })
}

fn format_tick_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn default_bar_viewport() -> Viewport {
    Viewport::new(1000, 500)
}

fn default_bar_margins() -> Margins {
    Margins::new(40.0, 30.0, 50.0, 40.0)
}

fn default_y_max() -> f64 {
    50.0
}

fn default_y_tick_step() -> f64 {
    10.0
}

fn default_band_padding() -> f64 {
    0.2
}

fn default_tick_size() -> f64 {
    6.0
}

fn default_tick_font_size() -> f64 {
    10.0
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_title() -> String {
    "Number of times mentioned in the book".to_owned()
}

fn default_title_font_size() -> f64 {
    16.0
}

fn default_x_title() -> String {
    "Colours a to g".to_owned()
}

fn default_x_title_font_size() -> f64 {
    22.0
}
