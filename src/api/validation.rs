use crate::error::{ChartError, ChartResult};
use crate::interaction::EntranceTiming;

use super::{ScatterStyle, ScatterViewConfig};

/// Upper bound for the whole entrance and for a single hover tween.
const MAX_TIMELINE_MS: u64 = 60 * 60 * 1000;

pub(super) fn validate_scatter_config(config: &ScatterViewConfig) -> ChartResult<()> {
    validate_scatter_style(&config.style)?;
    validate_entrance_timing(config.timing)?;

    let tooltip = &config.tooltip;
    for (name, value) in [
        ("tooltip offset x", tooltip.offset_x),
        ("tooltip offset y", tooltip.offset_y),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{name} must be finite")));
        }
    }
    if !tooltip.width_px.is_finite() || tooltip.width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "tooltip width must be finite and > 0".to_owned(),
        ));
    }
    if !tooltip.min_accent_contrast.is_finite() || tooltip.min_accent_contrast < 1.0 {
        return Err(ChartError::InvalidData(
            "tooltip minimum accent contrast must be finite and >= 1".to_owned(),
        ));
    }
    tooltip.background.validate()?;
    tooltip.border_color.validate()?;
    tooltip.fallback_accent.validate()
}

fn validate_entrance_timing(timing: EntranceTiming) -> ChartResult<()> {
    let total = timing
        .mark_delay_ms
        .checked_add(timing.mark_duration_ms)
        .and_then(|sum| sum.checked_add(timing.label_fade_ms))
        .filter(|total| *total <= MAX_TIMELINE_MS);
    if total.is_none() {
        return Err(ChartError::InvalidData(format!(
            "entrance timing (delay + duration + label fade) must not exceed {MAX_TIMELINE_MS} ms"
        )));
    }
    if timing.hover_transition_ms > MAX_TIMELINE_MS {
        return Err(ChartError::InvalidData(format!(
            "hover transition must not exceed {MAX_TIMELINE_MS} ms"
        )));
    }
    Ok(())
}

pub(super) fn validate_scatter_style(style: &ScatterStyle) -> ChartResult<()> {
    for (name, title) in [
        ("x axis title", &style.x_axis_title),
        ("y axis title", &style.y_axis_title),
    ] {
        if title.trim().is_empty() {
            return Err(ChartError::InvalidData(format!("{name} must not be empty")));
        }
    }
    for (name, value) in [
        ("mark radius", style.mark_radius),
        ("hover radius", style.hover_radius),
        ("label font size", style.label_font_size_px),
        ("axis line width", style.axis_line_width),
        ("grid dash", style.grid_dash_px),
        ("category font size", style.category_font_size_px),
        ("axis title font size", style.axis_title_font_size_px),
    ] {
        ensure_positive_finite(value, name)?;
    }
    for (name, value) in [
        ("mark opacity", style.mark_opacity),
        ("grid opacity", style.grid_opacity),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and in [0, 1]"
            )));
        }
    }
    for (name, value) in [
        ("label offset x", style.label_offset_x),
        ("label offset y", style.label_offset_y),
        ("tick size", style.tick_size_px),
        ("x category padding", style.x_category_padding_px),
        ("y category padding", style.y_category_padding_px),
        ("axis title offset", style.axis_title_offset_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{name} must be finite")));
        }
    }
    style.label_color.validate()?;
    style.axis_color.validate()?;
    style.axis_title_color.validate()
}

fn ensure_positive_finite(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
