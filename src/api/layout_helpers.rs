pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Deterministic and backend-independent; good enough for tooltip wrapping.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ';' | ':' | '\'' => 0.3,
            '-' | '(' | ')' => 0.38,
            ' ' => 0.33,
            'A'..='Z' => 0.68,
            _ => 0.55,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Greedy word wrap against the estimated width. A single word wider than
/// `max_width_px` gets a line of its own.
pub(super) fn wrap_text_to_width(text: &str, font_size_px: f64, max_width_px: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if estimate_label_text_width_px(&candidate, font_size_px) > max_width_px {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
