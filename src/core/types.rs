use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed pixel size of the drawing surface owned by one view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes and their labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Absolute pixel rectangle of the drawable (inner) area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Derived chart geometry: canvas size minus margins.
///
/// Recomputed on every draw cycle; never cached across mounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    viewport: Viewport,
    margins: Margins,
    inner_width: f64,
    inner_height: f64,
}

impl ChartGeometry {
    /// Fails fast when margins leave no positive drawable area.
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let inner_width = f64::from(viewport.width) - margins.left - margins.right;
        let inner_height = f64::from(viewport.height) - margins.top - margins.bottom;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ChartError::DegenerateGeometry {
                canvas_width: viewport.width,
                canvas_height: viewport.height,
                inner_width,
                inner_height,
            });
        }

        Ok(Self {
            viewport,
            margins,
            inner_width,
            inner_height,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.inner_width
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.inner_height
    }

    #[must_use]
    pub fn plot_rect(self) -> PlotRect {
        PlotRect {
            left: self.margins.left,
            top: self.margins.top,
            width: self.inner_width,
            height: self.inner_height,
        }
    }
}
