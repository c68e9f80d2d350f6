//! Integration module for connecting object detection backends with the
//! IOU tracker.
//!
//! The detector itself is an external collaborator; these traits and
//! utilities define the seam between any inference backend and the
//! tracking core.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{PipelineError, TrackerPipeline};
