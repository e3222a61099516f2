use serde::{Deserialize, Serialize};

use crate::interaction::AnimationPhase;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub active_step: i64,
    pub phase: AnimationPhase,
    pub mark_count: usize,
    pub tooltip_visible: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    Mounted,
    Redrawn { step: i64, phase: AnimationPhase },
    EntranceScheduled,
    EntranceCompleted,
    EntranceAbandoned,
    HoverEntered { term: String },
    HoverLeft { term: String },
    Unmounted,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe view events and read the view context; they cannot
/// reach into layout or animation state.
pub trait ScatterPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ViewEvent, context: ViewContext);
}
