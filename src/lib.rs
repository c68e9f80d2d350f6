//! Frame-to-frame multi-object tracking by greedy IoU association.
//!
//! The tracker consumes one set of bounding-box detections per video
//! frame and returns a mapping of persistent track ids to track state.
//! Matching uses geometric overlap only: no appearance model, no motion
//! prediction, no global assignment.
//!
//! # Example
//!
//! ```
//! use ioutrack_rs::{Detection, IouTracker, TrackerConfig};
//!
//! let mut tracker = IouTracker::new(TrackerConfig::default())?;
//!
//! let tracks = tracker.track(&[Detection::new(0.0, 0.0, 10.0, 10.0, 0.9)])?;
//! assert_eq!(tracks.len(), 1);
//! # Ok::<(), ioutrack_rs::TrackerError>(())
//! ```

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline};
pub use tracker::{Detection, IouTracker, Rect, Track, TrackerConfig, TrackerError};
