//! Main IOU tracker algorithm implementation.

use std::collections::BTreeMap;

use crate::tracker::error::TrackerError;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;
use crate::tracker::track_store::TrackStore;

/// Configuration for the IOU tracker. Immutable after construction.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Minimum confidence for a detection to be considered at all.
    pub sigma_l: f32,
    /// High-confidence threshold. Reserved: accepted and validated, but
    /// not consulted by the current matching or creation logic.
    pub sigma_h: f32,
    /// Minimum IoU required to extend a track with a detection.
    pub sigma_iou: f32,
    /// Number of consecutive unmatched frames a track survives before expiry.
    pub t_max: u32,
    /// Emit per-frame diagnostic logs. No behavioral effect.
    pub verbose: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sigma_l: 0.0,
            sigma_h: 0.5,
            sigma_iou: 0.5,
            t_max: 5,
            verbose: false,
        }
    }
}

impl TrackerConfig {
    fn validate(&self) -> Result<(), TrackerError> {
        if !self.sigma_l.is_finite() || self.sigma_l < 0.0 {
            return Err(TrackerError::ThresholdOutOfRange {
                name: "sigma_l",
                min: 0.0,
                max: f32::INFINITY,
                value: self.sigma_l,
            });
        }
        if !self.sigma_h.is_finite() || !(0.0..=1.0).contains(&self.sigma_h) {
            return Err(TrackerError::ThresholdOutOfRange {
                name: "sigma_h",
                min: 0.0,
                max: 1.0,
                value: self.sigma_h,
            });
        }
        if !self.sigma_iou.is_finite() || !(0.0..=1.0).contains(&self.sigma_iou) {
            return Err(TrackerError::ThresholdOutOfRange {
                name: "sigma_iou",
                min: 0.0,
                max: 1.0,
                value: self.sigma_iou,
            });
        }
        Ok(())
    }
}

/// Frame-to-frame tracker assigning persistent identities to detections
/// by greedy IoU association.
///
/// One instance per logical video stream; calls to [`track`](Self::track)
/// must be issued in frame order and never concurrently.
pub struct IouTracker {
    config: TrackerConfig,
    store: TrackStore,
    id_count: u64,
}

impl IouTracker {
    /// Create a tracker, rejecting out-of-range thresholds.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        let store = TrackStore::new(config.t_max);
        Ok(Self {
            config,
            store,
            id_count: 0,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of frames processed so far.
    pub fn current_frame(&self) -> u64 {
        self.store.current_frame()
    }

    /// Process one frame of detections and return the tracks alive in it.
    ///
    /// Per frame: expired history is pruned, detections below `sigma_l`
    /// are dropped, live tracks greedily claim detections by maximal IoU
    /// (most recently updated tracks first), and each leftover detection
    /// opens a new track. The returned map is a value copy of the
    /// frame's track set keyed by id.
    ///
    /// Fails fast on malformed detections, before any state changes.
    pub fn track(
        &mut self,
        detections: &[Detection],
    ) -> Result<BTreeMap<u64, Track>, TrackerError> {
        for det in detections {
            det.validate()?;
        }

        self.store.advance_frame();
        self.store.prune();

        let candidates: Vec<Detection> = detections
            .iter()
            .filter(|det| det.score >= self.config.sigma_l)
            .cloned()
            .collect();

        let live = self.store.live_tracks_newest_first();
        let track_boxes: Vec<Rect> = live.iter().map(|(_, track)| track.bbox).collect();

        let AssignmentResult {
            matches,
            unmatched_detections,
        } = matching::greedy_assignment(&track_boxes, &candidates, self.config.sigma_iou);

        for (track_idx, det_idx) in matches {
            let updated = live[track_idx].1.advanced(&candidates[det_idx]);
            if self.config.verbose {
                log::debug!(
                    "frame {}: track {} updated, bbox {:?}",
                    self.current_frame(),
                    updated.id,
                    updated.bbox.to_tlbr()
                );
            }
            self.store.write(updated);
        }

        for det_idx in unmatched_detections {
            self.id_count += 1;
            let opened = Track::new(self.id_count, &candidates[det_idx]);
            if self.config.verbose {
                log::debug!(
                    "frame {}: track {} opened, start point {:?}",
                    self.current_frame(),
                    opened.id,
                    opened.start_point
                );
            }
            self.store.write(opened);
        }

        Ok(self.store.current_tracks())
    }

    /// Every track alive anywhere in the retention window, keyed by id,
    /// with `active` set iff the track was updated in the current frame.
    pub fn get_active_tracks(&self) -> BTreeMap<u64, Track> {
        self.store.windowed_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_config() {
        let config = TrackerConfig {
            sigma_iou: -0.1,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            IouTracker::new(config),
            Err(TrackerError::ThresholdOutOfRange {
                name: "sigma_iou",
                ..
            })
        ));

        let config = TrackerConfig {
            sigma_h: 1.5,
            ..TrackerConfig::default()
        };
        assert!(IouTracker::new(config).is_err());

        let config = TrackerConfig {
            sigma_l: f32::NAN,
            ..TrackerConfig::default()
        };
        assert!(IouTracker::new(config).is_err());
    }

    #[test]
    fn test_malformed_detection_leaves_state_untouched() {
        let mut tracker = IouTracker::new(TrackerConfig::default()).unwrap();
        tracker
            .track(&[Detection::new(0.0, 0.0, 10.0, 10.0, 0.9)])
            .unwrap();
        assert_eq!(tracker.current_frame(), 1);

        let bad = Detection::new(10.0, 10.0, 0.0, 0.0, 0.9);
        assert!(tracker.track(&[bad]).is_err());

        // The failed call consumed no frame.
        assert_eq!(tracker.current_frame(), 1);
        assert_eq!(tracker.get_active_tracks().len(), 1);
    }

    #[test]
    fn test_new_tracks_get_increasing_ids() {
        let mut tracker = IouTracker::new(TrackerConfig::default()).unwrap();
        let tracks = tracker
            .track(&[
                Detection::new(0.0, 0.0, 10.0, 10.0, 0.9),
                Detection::new(50.0, 50.0, 60.0, 60.0, 0.8),
            ])
            .unwrap();

        assert_eq!(tracks.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
