use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error(
        "degenerate chart geometry: canvas {canvas_width}x{canvas_height} leaves a drawable area of {inner_width}x{inner_height}"
    )]
    DegenerateGeometry {
        canvas_width: u32,
        canvas_height: u32,
        inner_width: f64,
        inner_height: f64,
    },

    #[error("degenerate scale domain: [{start}, {end}]")]
    DegenerateDomain { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load data set: {0}")]
    DataLoad(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
