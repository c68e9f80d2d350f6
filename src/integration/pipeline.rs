//! TrackerPipeline for combining detection with tracking.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::tracker::{IouTracker, Track, TrackerConfig, TrackerError};

use super::DetectionSource;

/// Error from a pipeline step: either the detector backend failed, or
/// the tracker rejected its input.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    #[error("detection failed: {0}")]
    Detection(E),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// A combined pipeline that bundles detection inference with the IOU
/// tracker.
///
/// This struct provides a convenient way to run end-to-end tracking by
/// combining any [`DetectionSource`] with an [`IouTracker`].
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: IouTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and
    /// tracker config. Fails if the config is out of range.
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            detector,
            tracker: IouTracker::new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Result<Self, TrackerError> {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame and return the tracks alive in it.
    ///
    /// Runs detection on the input image, then updates the tracker with
    /// the detected objects.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<BTreeMap<u64, Track>, PipelineError<D::Error>> {
        let detections = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detection)?;
        Ok(self.tracker.track(&detections)?)
    }

    /// Every track alive in the tracker's retention window, with the
    /// `active` flag set for tracks updated in the latest frame.
    pub fn active_tracks(&self) -> BTreeMap<u64, Track> {
        self.tracker.get_active_tracks()
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &IouTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut IouTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Detection;

    struct MockDetector {
        frames: Vec<Vec<Detection>>,
        next: usize,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Detection>, Self::Error> {
            let frame = self.frames[self.next].clone();
            self.next += 1;
            Ok(frame)
        }
    }

    #[test]
    fn test_pipeline_tracks_across_frames() {
        let detector = MockDetector {
            frames: vec![
                vec![Detection::new(10.0, 20.0, 50.0, 80.0, 0.9)],
                vec![Detection::new(12.0, 22.0, 52.0, 82.0, 0.9)],
            ],
            next: 0,
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector).unwrap();

        let first = pipeline.process_frame(&[], 640, 480).unwrap();
        assert_eq!(first.keys().copied().collect::<Vec<_>>(), vec![1]);

        let second = pipeline.process_frame(&[], 640, 480).unwrap();
        assert_eq!(second.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert!(pipeline.active_tracks()[&1].active);
    }

    #[test]
    fn test_pipeline_surfaces_tracker_errors() {
        let detector = MockDetector {
            frames: vec![vec![Detection::new(50.0, 80.0, 10.0, 20.0, 0.9)]],
            next: 0,
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector).unwrap();
        let result = pipeline.process_frame(&[], 640, 480);
        assert!(matches!(result, Err(PipelineError::Tracker(_))));
    }
}
