//! Hooks for host-side extensions of a mounted view.

pub mod plugins;

pub use plugins::{ScatterPlugin, ViewContext, ViewEvent};
