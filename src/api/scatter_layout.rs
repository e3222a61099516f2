use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartGeometry, DataSet, LinearScale};
use crate::error::ChartResult;
use crate::render::Color;

use super::axis_layout::{AxisLayout, compute_axis_layout};
use super::{ScatterStyle, ScatterTheme};

/// Gleam (x) and luminosity (y) scales of one draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScatterScales {
    /// Builds both scales over the plot rectangle. The y range is inverted
    /// so larger scores sit higher on screen.
    pub fn for_geometry(
        geometry: ChartGeometry,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) -> ChartResult<Self> {
        let plot = geometry.plot_rect();
        Ok(Self {
            x: LinearScale::new(x_domain, (plot.left, plot.right()))?,
            y: LinearScale::new(y_domain, (plot.bottom(), plot.top))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkLayout {
    pub term: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub term: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
}

/// Final, settled geometry of the scatter view.
///
/// Marks and labels keep data-set order; later entries draw on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub geometry: ChartGeometry,
    pub scales: ScatterScales,
    pub axes: AxisLayout,
    pub marks: Vec<MarkLayout>,
    pub labels: Vec<LabelLayout>,
    /// Where entering marks fly in from: the top-right plot corner.
    pub entrance_origin: (f64, f64),
}

impl ScatterLayout {
    #[must_use]
    pub fn mark(&self, term: &str) -> Option<&MarkLayout> {
        self.marks.iter().find(|mark| mark.term == term)
    }

    #[must_use]
    pub fn label(&self, term: &str) -> Option<&LabelLayout> {
        self.labels.iter().find(|label| label.term == term)
    }
}

pub fn compute_scatter_layout(
    data: &DataSet,
    geometry: ChartGeometry,
    scales: ScatterScales,
    theme: &ScatterTheme,
    style: &ScatterStyle,
) -> ChartResult<ScatterLayout> {
    let axes = compute_axis_layout(geometry, scales.x, scales.y, style)?;
    let plot = geometry.plot_rect();

    let mut marks = Vec::with_capacity(data.len());
    let mut labels = Vec::with_capacity(data.len());
    for record in data.iter() {
        let cx = scales.x.map(record.gleam_score)?;
        let cy = scales.y.map(record.luminosity_score)?;

        let fill = match theme.palette.get(&record.term) {
            Some(color) => color,
            None => {
                debug!(term = %record.term, "term missing from palette, using fallback color");
                theme.palette.fallback()
            }
        };
        marks.push(MarkLayout {
            term: record.term.clone(),
            cx,
            cy,
            radius: style.mark_radius,
            fill,
            opacity: style.mark_opacity,
        });

        let offset = theme.label_offsets.offset_for(&record.term);
        labels.push(LabelLayout {
            term: record.term.clone(),
            x: cx + style.label_offset_x + offset.dx,
            y: cy + style.label_offset_y + offset.dy,
            font_size_px: style.label_font_size_px,
            color: style.label_color,
        });
    }

    Ok(ScatterLayout {
        geometry,
        scales,
        axes,
        marks,
        labels,
        entrance_origin: (plot.right(), plot.top),
    })
}
