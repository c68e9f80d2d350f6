//! Persistent track identity derived from per-frame detections.

use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;

/// A detection that has been assigned a persistent identity.
///
/// Tracks are value copies: the store never aliases the caller's
/// detections, and updating a track produces a fresh `Track`.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track identifier, strictly increasing in creation order
    pub id: u64,
    /// Bounding box of the most recent matched detection (TLWH format)
    pub bbox: Rect,
    /// Confidence score of the most recent matched detection
    pub score: f32,
    /// Integer pixel center of the detection the track was created from.
    /// Fixed for the lifetime of the track.
    pub start_point: (i32, i32),
    /// Whether the track was updated in the current frame. Only meaningful
    /// on snapshots returned by [`get_active_tracks`](crate::tracker::IouTracker::get_active_tracks).
    pub active: bool,
}

impl Track {
    /// Open a new track from an unmatched detection.
    pub fn new(id: u64, detection: &Detection) -> Self {
        let (cx, cy) = detection.bbox.center();
        Self {
            id,
            bbox: detection.bbox,
            score: detection.score,
            start_point: (cx as i32, cy as i32),
            active: false,
        }
    }

    /// Extend this track with the detection matched to it this frame.
    ///
    /// The identity and start point survive; bbox and score are taken
    /// from the detection.
    pub fn advanced(&self, detection: &Detection) -> Self {
        Self {
            id: self.id,
            bbox: detection.bbox,
            score: detection.score,
            start_point: self.start_point,
            active: false,
        }
    }
}
