mod error;
mod iou_tracker;
mod matching;
mod rect;
mod track;
mod track_store;

pub use error::TrackerError;
pub use iou_tracker::{IouTracker, TrackerConfig};
pub use matching::Detection;
pub use rect::Rect;
pub use track::Track;
