use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Neutral gray used for terms missing from a palette.
pub const FALLBACK_TERM_COLOR: Color = Color::rgb8(0xcc, 0xcc, 0xcc);

const HOMERIC_COLORS: [(&str, Color); 14] = [
    ("γλαυκός", Color::rgb8(0x6b, 0x9a, 0xa3)),
    ("κυάνεος", Color::rgb8(0x1e, 0x3a, 0x5f)),
    ("πορφυρεός", Color::rgb8(0x53, 0x28, 0x5b)),
    ("οἶνοψ", Color::rgb8(0x43, 0x17, 0x1e)),
    ("φοῖνιξ", Color::rgb8(0x8b, 0x2f, 0x39)),
    ("ἐρυθρός", Color::rgb8(0xb8, 0x30, 0x2c)),
    ("ῥοδοδάκτυλος", Color::rgb8(0xe8, 0xa0, 0xa0)),
    ("ξανθός", Color::rgb8(0xd4, 0xaf, 0x37)),
    ("αἴθων", Color::rgb8(0xc8, 0x5a, 0x28)),
    ("χλωρός", Color::rgb8(0x9c, 0xaf, 0x88)),
    ("λευκός", Color::rgb8(0xfa, 0xfa, 0xfa)),
    ("ἀργός", Color::rgb8(0xf4, 0xf4, 0xf4)),
    ("πολιός", Color::rgb8(0xc2, 0xc2, 0xc2)),
    ("μέλας", Color::rgb8(0x1a, 0x1a, 0x1a)),
];

/// Term → display colour lookup with a fallback for unknown terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPalette {
    colors: IndexMap<String, Color>,
    fallback: Color,
}

impl Default for TermPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl TermPalette {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: IndexMap::new(),
            fallback: FALLBACK_TERM_COLOR,
        }
    }

    /// Display colours of the fourteen Homeric terms.
    #[must_use]
    pub fn homeric() -> Self {
        HOMERIC_COLORS
            .iter()
            .fold(Self::new(), |palette, (term, color)| {
                palette.with_color(*term, *color)
            })
    }

    #[must_use]
    pub fn with_color(mut self, term: impl Into<String>, color: Color) -> Self {
        self.insert(term, color);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Color) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn insert(&mut self, term: impl Into<String>, color: Color) {
        self.colors.insert(term.into(), color);
    }

    #[must_use]
    pub fn get(&self, term: &str) -> Option<Color> {
        self.colors.get(term).copied()
    }

    #[must_use]
    pub fn color_for(&self, term: &str) -> Color {
        self.get(term).unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(term, color)| (term.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Manual pixel nudge applied to one term's label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}

impl LabelOffset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Term → label offset lookup; missing terms get `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelOffsets {
    offsets: IndexMap<String, LabelOffset>,
}

impl LabelOffsets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps χλωρός clear of the οἶνοψ label.
    #[must_use]
    pub fn homeric() -> Self {
        Self::new().with_offset("χλωρός", LabelOffset::new(-5.0, -26.0))
    }

    #[must_use]
    pub fn with_offset(mut self, term: impl Into<String>, offset: LabelOffset) -> Self {
        self.offsets.insert(term.into(), offset);
        self
    }

    #[must_use]
    pub fn offset_for(&self, term: &str) -> LabelOffset {
        self.offsets.get(term).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LabelOffset)> {
        self.offsets
            .iter()
            .map(|(term, offset)| (term.as_str(), *offset))
    }
}

/// Injected appearance tables consumed by the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTheme {
    pub palette: TermPalette,
    pub label_offsets: LabelOffsets,
}

impl Default for ScatterTheme {
    fn default() -> Self {
        Self::homeric()
    }
}

impl ScatterTheme {
    #[must_use]
    pub fn new(palette: TermPalette, label_offsets: LabelOffsets) -> Self {
        Self {
            palette,
            label_offsets,
        }
    }

    #[must_use]
    pub fn homeric() -> Self {
        Self::new(TermPalette::homeric(), LabelOffsets::homeric())
    }
}
