use thiserror::Error;

/// Errors reported by the tracker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// A detection carried a NaN or infinite coordinate or score.
    #[error("detection has non-finite values: bbox=({x0}, {y0}, {x1}, {y1}), score={score}")]
    NonFiniteDetection {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        score: f32,
    },
    /// A detection bbox with inverted or collapsed corners (x0 >= x1 or y0 >= y1).
    #[error("detection bbox is inverted or empty: ({x0}, {y0}, {x1}, {y1})")]
    InvertedBoundingBox { x0: f32, y0: f32, x1: f32, y1: f32 },
    /// A configuration threshold outside its valid range.
    #[error("{name} must lie in [{min}, {max}], got {value}")]
    ThresholdOutOfRange {
        name: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
}
