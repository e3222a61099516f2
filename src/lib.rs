//! gleam-chart: layout, entrance animation and tooltip state for the Homeric
//! colour-term scatterplot.
//!
//! Records map through two linear scales into backend-agnostic render
//! frames. A mounted [`ScatterView`] plays its entrance once, the first time
//! the host's step reaches the reveal threshold, and settles on every later
//! redraw.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ScatterTheme, ScatterView, ScatterViewConfig};
pub use error::{ChartError, ChartResult};
