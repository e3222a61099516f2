use smallvec::SmallVec;

use crate::core::{ChartGeometry, LinearScale};
use crate::error::ChartResult;
use crate::render::{FontFamily, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive};

use super::ScatterStyle;

pub const CATEGORY_LABELS: [&str; 3] = ["LOW", "MODERATE", "HIGH"];

// d3 positions bottom-axis labels at `padding` plus 0.71em.
const BOTTOM_LABEL_BASELINE_EM: f64 = 0.71;

/// Axes, category bands and gridlines of the scatter view.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub grid: Vec<LinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Lays out both axes with `LOW`/`MODERATE`/`HIGH` bands over equal thirds
/// of each domain.
pub fn compute_axis_layout(
    geometry: ChartGeometry,
    x_scale: LinearScale,
    y_scale: LinearScale,
    style: &ScatterStyle,
) -> ChartResult<AxisLayout> {
    let plot = geometry.plot_rect();
    let bands = CATEGORY_LABELS.len();
    let axis_color = style.axis_color;
    let grid_color = axis_color.with_alpha(style.grid_opacity);
    let dashed = LineStrokeStyle::Dashed {
        on_px: style.grid_dash_px,
        off_px: style.grid_dash_px,
    };

    let mut layout = AxisLayout {
        grid: Vec::new(),
        lines: Vec::new(),
        texts: Vec::new(),
    };

    let x_separators = x_scale.domain_separators(bands);
    let y_separators = y_scale.domain_separators(bands);

    for value in &x_separators {
        let x = x_scale.map(*value)?;
        layout.grid.push(
            LinePrimitive::new(x, plot.top, x, plot.bottom(), 1.0, grid_color)
                .with_stroke_style(dashed),
        );
    }
    for value in &y_separators {
        let y = y_scale.map(*value)?;
        layout.grid.push(
            LinePrimitive::new(plot.left, y, plot.right(), y, 1.0, grid_color)
                .with_stroke_style(dashed),
        );
    }

    // Domain lines.
    layout.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_line_width,
        axis_color,
    ));
    layout.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        style.axis_line_width,
        axis_color,
    ));

    if style.tick_size_px > 0.0 {
        for value in boundary_ticks(x_scale, &x_separators) {
            let x = x_scale.map(value)?;
            layout.lines.push(LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + style.tick_size_px,
                style.axis_line_width,
                axis_color,
            ));
        }
        for value in boundary_ticks(y_scale, &y_separators) {
            let y = y_scale.map(value)?;
            layout.lines.push(LinePrimitive::new(
                plot.left - style.tick_size_px,
                y,
                plot.left,
                y,
                style.axis_line_width,
                axis_color,
            ));
        }
    }

    let x_label_baseline = plot.bottom()
        + style.x_category_padding_px
        + BOTTOM_LABEL_BASELINE_EM * style.category_font_size_px;
    for (label, value) in CATEGORY_LABELS.iter().zip(x_scale.band_centers(bands)) {
        layout.texts.push(
            TextPrimitive::new(
                *label,
                x_scale.map(value)?,
                x_label_baseline,
                style.category_font_size_px,
                axis_color,
                TextHAlign::Center,
            )
            .with_font_family(FontFamily::Monospace),
        );
    }
    for (label, value) in CATEGORY_LABELS.iter().zip(y_scale.band_centers(bands)) {
        layout.texts.push(
            TextPrimitive::new(
                *label,
                plot.left - style.y_category_padding_px,
                y_scale.map(value)?,
                style.category_font_size_px,
                axis_color,
                TextHAlign::Center,
            )
            .with_font_family(FontFamily::Monospace)
            .with_rotation(-90.0),
        );
    }

    layout.texts.push(TextPrimitive::new(
        style.x_axis_title.clone(),
        plot.center_x(),
        plot.bottom() + style.axis_title_offset_px,
        style.axis_title_font_size_px,
        style.axis_title_color,
        TextHAlign::Center,
    ));
    layout.texts.push(
        TextPrimitive::new(
            style.y_axis_title.clone(),
            plot.left - style.axis_title_offset_px,
            plot.center_y(),
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0),
    );

    Ok(layout)
}

fn boundary_ticks(scale: LinearScale, separators: &[f64]) -> SmallVec<[f64; 4]> {
    let (start, end) = scale.domain();
    let mut ticks = SmallVec::new();
    ticks.push(start);
    ticks.extend(separators.iter().copied());
    ticks.push(end);
    ticks
}
