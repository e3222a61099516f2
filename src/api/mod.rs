//! Public view API: configuration, pure layout and the mounted view.

mod axis_layout;
mod bar_layout;
mod config;
mod interaction_controller;
mod json_contract;
mod layout_helpers;
mod palette;
mod plugin_dispatch;
mod plugin_registry;
#[cfg(feature = "cairo-backend")]
mod render_cairo_coordinator;
mod render_frame_builder;
mod scatter_layout;
mod snapshot;
mod validation;
mod view;

pub use axis_layout::{AxisLayout, CATEGORY_LABELS, compute_axis_layout};
pub use bar_layout::{
    BarChartConfig, BarGeometry, BarLayout, BarRecord, bar_records_from_json_str,
    compute_bar_layout,
};
pub use config::{ScatterStyle, ScatterViewConfig};
pub use json_contract::{
    SCATTER_CONFIG_JSON_SCHEMA_V1, SCATTER_SNAPSHOT_JSON_SCHEMA_V1,
    ScatterSnapshotJsonContractV1, ScatterViewConfigJsonContractV1,
};
pub use palette::{FALLBACK_TERM_COLOR, LabelOffset, LabelOffsets, ScatterTheme, TermPalette};
pub use scatter_layout::{
    LabelLayout, MarkLayout, ScatterLayout, ScatterScales, compute_scatter_layout,
};
pub use snapshot::{LabelSnapshot, MarkSnapshot, ScatterSnapshot};
pub use view::ScatterView;
