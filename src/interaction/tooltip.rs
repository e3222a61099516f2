use serde::{Deserialize, Serialize};

use crate::core::ColorTermRecord;
use crate::render::{Color, escape_xml};

/// Placement and legibility rules for the floating tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipBehavior {
    /// Offset from the pointer so the box never covers the cursor.
    pub offset_x: f64,
    pub offset_y: f64,
    pub width_px: f64,
    pub background: Color,
    pub border_color: Color,
    /// Accent colours with a lower contrast ratio against `background`
    /// render in `fallback_accent` instead.
    pub min_accent_contrast: f64,
    pub fallback_accent: Color,
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            offset_x: 30.0,
            offset_y: -10.0,
            width_px: 300.0,
            background: Color::WHITE,
            border_color: Color::BLACK,
            min_accent_contrast: 1.5,
            fallback_accent: Color::BLACK,
        }
    }
}

impl TooltipBehavior {
    #[must_use]
    pub fn resolve_accent(&self, display_color: Color) -> Color {
        if display_color.contrast_ratio(self.background) < self.min_accent_contrast {
            self.fallback_accent
        } else {
            display_color
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub term: String,
    pub transliteration: String,
    pub english_gloss: String,
    pub context: String,
    pub accent_color: Color,
}

impl TooltipContent {
    #[must_use]
    pub fn from_record(record: &ColorTermRecord, accent_color: Color) -> Self {
        Self {
            term: record.term.clone(),
            transliteration: record.transliteration.clone(),
            english_gloss: record.english_gloss.clone(),
            context: record.context.clone(),
            accent_color,
        }
    }
}

/// The single floating tooltip of a view instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn show(
        &mut self,
        content: TooltipContent,
        pointer_x: f64,
        pointer_y: f64,
        behavior: &TooltipBehavior,
    ) {
        self.content = Some(content);
        self.visible = true;
        self.move_to(pointer_x, pointer_y, behavior);
    }

    pub fn move_to(&mut self, pointer_x: f64, pointer_y: f64, behavior: &TooltipBehavior) {
        self.left = pointer_x + behavior.offset_x;
        self.top = pointer_y + behavior.offset_y;
    }

    /// Hides the tooltip; content is kept until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Markup for hosts that float the tooltip as an HTML overlay.
    ///
    /// Returns `None` when nothing has been shown yet.
    #[must_use]
    pub fn to_html(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        let opacity = if self.visible { 1 } else { 0 };
        Some(format!(
            concat!(
                r#"<div class="html-tooltip" style="opacity: {opacity}; left: {left}px; top: {top}px;">"#,
                r#"<div style="font-size: 13px; font-weight: bold; margin-bottom: 4px; color: #000;">"#,
                r#"<span>{transliteration}</span> "#,
                r#"<span style="font-family: Georgia, serif; font-weight: normal; font-size: 15px; color: {accent};">{term}</span>"#,
                r#"</div>"#,
                r#"<div style="color: #666; font-style: italic;">{english}</div>"#,
                r#"<div style="margin-top: 5px; padding-top: 5px; font-size: 11px;">{context}</div>"#,
                r#"</div>"#
            ),
            opacity = opacity,
            left = self.left,
            top = self.top,
            transliteration = escape_xml(&content.transliteration),
            accent = content.accent_color.to_hex_rgb(),
            term = escape_xml(&content.term),
            english = escape_xml(&content.english_gloss),
            context = escape_xml(&content.context),
        ))
    }
}
