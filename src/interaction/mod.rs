//! Entrance animation state machine, hover tracking and tooltip state.
//!
//! Everything here is pure state advanced by explicit calls; nothing reads a
//! wall clock. Hosts drive time through `ScatterView::advance`.

mod animation;
mod easing;
mod hover;
mod tooltip;

pub use animation::{AnimationPhase, AnimationState, EntranceTimeline, EntranceTiming};
pub use easing::{Easing, Transition, lerp};
pub use hover::HoverState;
pub use tooltip::{TooltipBehavior, TooltipContent, TooltipState};
