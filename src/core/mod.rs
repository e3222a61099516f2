pub mod band_scale;
pub mod record;
pub mod scale;
pub mod types;

pub use band_scale::BandScale;
pub use record::{ColorTermRecord, DataSet, SCORE_MAX, SCORE_MIN};
pub use scale::LinearScale;
pub use types::{ChartGeometry, Margins, PlotRect, Viewport};
