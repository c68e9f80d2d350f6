//! Detection input and greedy IoU association.

use crate::tracker::error::TrackerError;
use crate::tracker::rect::{Rect, iou_matrix};

/// Detection input for the tracker.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box (TLWH storage, TLBR constructors)
    pub bbox: Rect,
    /// Detection confidence score
    pub score: f32,
}

impl Detection {
    /// Create a detection from a TLBR box (x0, y0, x1, y1) and a score.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32, score: f32) -> Self {
        Self {
            bbox: Rect::from_tlbr(x0, y0, x1, y1),
            score,
        }
    }

    pub fn from_rect(bbox: Rect, score: f32) -> Self {
        Self { bbox, score }
    }

    /// Reject detections the tracker cannot score meaningfully:
    /// non-finite values, and inverted or collapsed boxes.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let [x0, y0, x1, y1] = self.bbox.to_tlbr();
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite())
            || !self.score.is_finite()
        {
            return Err(TrackerError::NonFiniteDetection {
                x0,
                y0,
                x1,
                y1,
                score: self.score,
            });
        }
        if x0 >= x1 || y0 >= y1 {
            return Err(TrackerError::InvertedBoundingBox { x0, y0, x1, y1 });
        }
        Ok(())
    }
}

/// Outcome of associating live tracks with one frame's detections.
///
/// Indices refer to the input slices; `unmatched_detections` keeps the
/// pool order of the detections no track claimed.
#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedily assign detections to tracks by maximal IoU.
///
/// Tracks are processed in the order given (the caller's priority
/// order). Each track claims the unclaimed detection with the highest
/// IoU against its box, provided that IoU is at least `sigma_iou`; ties
/// go to the first maximal detection in pool order. Claiming removes
/// the detection from the pool, so no detection is matched twice. Not
/// globally optimal: an earlier track may take a detection a later
/// track overlaps more.
pub fn greedy_assignment(
    track_boxes: &[Rect],
    detections: &[Detection],
    sigma_iou: f32,
) -> AssignmentResult {
    let det_boxes: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
    let ious = iou_matrix(track_boxes, &det_boxes);

    let mut claimed = vec![false; detections.len()];
    let mut remaining = detections.len();
    let mut matches = Vec::new();

    for row in 0..track_boxes.len() {
        if remaining == 0 {
            break;
        }

        let mut best: Option<(usize, f32)> = None;
        for col in 0..detections.len() {
            if claimed[col] {
                continue;
            }
            let iou = ious[[row, col]];
            if best.is_none_or(|(_, top)| iou > top) {
                best = Some((col, iou));
            }
        }

        if let Some((col, iou)) = best {
            if iou >= sigma_iou {
                matches.push((row, col));
                claimed[col] = true;
                remaining -= 1;
            }
        }
    }

    let unmatched_detections = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &taken)| if taken { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_detections,
    }
}
