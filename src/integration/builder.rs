//! Builder for creating Detection objects from various input formats.

use crate::tracker::{Detection, TrackerError};

/// Builder for creating `Detection` objects from various input formats.
///
/// [`build`](Self::build) validates the assembled detection, so a
/// detector backend wired through this builder cannot hand the tracker
/// an inverted or non-finite box.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    score: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x0, y0, x1, y1).
    pub fn tlbr(mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x0 = cx - w / 2.0;
        self.y0 = cy - h / 2.0;
        self.x1 = cx + w / 2.0;
        self.y1 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x0 = x;
        self.y0 = y;
        self.x1 = x + w;
        self.y1 = y + h;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final `Detection`, validating it.
    pub fn build(self) -> Result<Detection, TrackerError> {
        let detection = Detection::new(self.x0, self.y0, self.x1, self.y1, self.score);
        detection.validate()?;
        Ok(detection)
    }
}
