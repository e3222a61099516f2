use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{AnimationPhase, TooltipState};
use crate::render::Renderer;

use super::ScatterView;

/// One mark as it is painted in the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSnapshot {
    pub term: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSnapshot {
    pub term: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

/// Deterministic view state useful for regression tests and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSnapshot {
    pub active_step: i64,
    pub phase: AnimationPhase,
    pub has_played_entrance: bool,
    pub hovered: Option<String>,
    pub marks: Vec<MarkSnapshot>,
    pub labels: Vec<LabelSnapshot>,
    pub tooltip: TooltipState,
}

impl<R: Renderer> ScatterView<R> {
    #[must_use]
    pub fn snapshot(&self) -> ScatterSnapshot {
        ScatterSnapshot {
            active_step: self.active_step,
            phase: self.phase,
            has_played_entrance: self.animation.has_played_entrance(),
            hovered: self.hover.hovered().map(str::to_owned),
            marks: self.resolve_marks(),
            labels: self.resolve_labels(),
            tooltip: self.tooltip.clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
