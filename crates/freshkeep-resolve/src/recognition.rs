//! Mapping of image-detector output onto pantry metadata. The detector call
//! itself lives outside the engine; this module handles its concept list.

use serde::{Deserialize, Serialize};

use freshkeep_core::{FoodRecord, MatchKind};

use crate::resolve;

/// Concepts at or below this confidence are discarded.
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// At most this many detections are kept per frame.
pub const MAX_DETECTIONS: usize = 5;

// ── Types ──

/// One label from the image detector, with its confidence score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedLabel {
    pub label: String,
    pub confidence: f64,
}

/// A detection resolved to catalog metadata, as handed to the
/// camera-confirmation UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecognizedItem {
    pub record: FoodRecord,
    pub match_kind: MatchKind,
    pub confidence: f64,
}

// ── Public API ──

/// Resolve a detector's concept list: drop low-confidence concepts, cap the
/// count, and map each surviving label through the resolver.
pub fn map_detections(detections: &[DetectedLabel]) -> Vec<RecognizedItem> {
    detections
        .iter()
        .filter(|d| d.confidence > CONFIDENCE_FLOOR)
        .take(MAX_DETECTIONS)
        .map(|d| {
            let resolved = resolve(&d.label);
            log::debug!(
                "detection {:?} ({:.2}) -> {} [{}]",
                d.label,
                d.confidence,
                resolved.record.name,
                resolved.match_kind
            );
            RecognizedItem {
                record: resolved.record,
                match_kind: resolved.match_kind,
                confidence: d.confidence,
            }
        })
        .collect()
}

// ── Tests ──
