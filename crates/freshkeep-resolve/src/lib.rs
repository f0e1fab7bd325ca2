//! Food-identity resolution: turn a noisy free-text label into canonical
//! pantry metadata, deterministically and without I/O.
//!
//! Tiers, first match wins: exact catalog key, bidirectional substring scan
//! over the catalog in authored order, category cue heuristics on the raw
//! label, generic fallback. The function is total: every string resolves.

use freshkeep_core::{FoodCategory, FoodRecord, MatchKind, ResolvedItem, Unit};

pub mod draft;
pub mod recognition;

pub use draft::on_name_edited;
pub use recognition::{map_detections, DetectedLabel, RecognizedItem};

// ── Heuristic Rules ──

/// Category cue tested against the raw lowercased label when the catalog has
/// no match. Priority is the order below.
struct HeuristicRule {
    cues: &'static [&'static str],
    category: FoodCategory,
    emoji: &'static str,
    expiry_days: u32,
    unit: Unit,
}

const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        cues: &["fruit", "berry"],
        category: FoodCategory::Produce,
        emoji: "🍎",
        expiry_days: 7,
        unit: Unit::Piece,
    },
    HeuristicRule {
        cues: &["vegetable", "green", "leaf"],
        category: FoodCategory::Produce,
        emoji: "🥬",
        expiry_days: 7,
        unit: Unit::Piece,
    },
    HeuristicRule {
        cues: &["meat", "chicken", "beef", "pork"],
        category: FoodCategory::Protein,
        emoji: "🥩",
        expiry_days: 3,
        unit: Unit::Lb,
    },
    HeuristicRule {
        cues: &["dairy", "milk", "cheese"],
        category: FoodCategory::Dairy,
        emoji: "🥛",
        expiry_days: 7,
        unit: Unit::Container,
    },
    HeuristicRule {
        cues: &["drink", "juice", "soda"],
        category: FoodCategory::Drinks,
        emoji: "🧃",
        expiry_days: 14,
        unit: Unit::Bottle,
    },
    HeuristicRule {
        cues: &["bread", "grain", "cereal"],
        category: FoodCategory::Grains,
        emoji: "🍞",
        expiry_days: 7,
        unit: Unit::Piece,
    },
    HeuristicRule {
        cues: &["snack", "chips", "cookies"],
        category: FoodCategory::Snacks,
        emoji: "🍪",
        expiry_days: 30,
        unit: Unit::Package,
    },
];

// ── Public API ──

/// Resolve a free-text food label. Never fails: the worst case is the
/// generic fallback record, so item creation never blocks on recognition
/// uncertainty.
pub fn resolve(label: &str) -> ResolvedItem {
    let normalized = normalize(label);

    if let Some(record) = freshkeep_catalog::lookup_exact(&normalized) {
        log::debug!("exact match {:?} -> {}", label, record.name);
        return resolved(label, record.clone(), MatchKind::Exact);
    }

    // An empty needle would substring-match every key, so malformed input
    // (punctuation-only, digits-only) skips straight past this tier.
    if !normalized.is_empty() {
        for (key, record) in freshkeep_catalog::entries() {
            if normalized.contains(key) || key.contains(normalized.as_str()) {
                log::debug!("partial match {:?} via key {:?} -> {}", label, key, record.name);
                return resolved(label, record.clone(), MatchKind::Partial);
            }
        }
    }

    if let Some(record) = heuristic_record(label) {
        log::debug!("heuristic match {:?} -> {}", label, record.category);
        return resolved(label, record, MatchKind::Heuristic);
    }

    log::debug!("fallback for {:?}", label);
    resolved(label, fallback_record(label), MatchKind::Fallback)
}

// ── Helpers ──

/// Lowercase and keep only ASCII letters: "Bell Pepper!" -> "bellpepper",
/// "2% Milk" -> "milk". Aggressive on purpose so detector noise, digits and
/// punctuation never block a match.
fn normalize(label: &str) -> String {
    label
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Uppercase the first character, leave the rest of the label verbatim.
fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn resolved(label: &str, record: FoodRecord, match_kind: MatchKind) -> ResolvedItem {
    ResolvedItem {
        raw_label: label.to_string(),
        record,
        match_kind,
    }
}

/// The heuristic tier looks at the raw lowercased label, not the normalized
/// one, so multi-word cues keep their word boundaries.
fn heuristic_record(label: &str) -> Option<FoodRecord> {
    let lower = label.to_lowercase();
    for rule in HEURISTIC_RULES {
        if rule.cues.iter().any(|cue| lower.contains(cue)) {
            return Some(FoodRecord {
                name: capitalize_first(label),
                category: rule.category,
                emoji: rule.emoji.to_string(),
                expiry_days: rule.expiry_days,
                quantity: 1.0,
                unit: rule.unit,
            });
        }
    }
    None
}

fn fallback_record(label: &str) -> FoodRecord {
    FoodRecord {
        name: capitalize_first(label),
        category: FoodCategory::Other,
        emoji: "🥘".to_string(),
        expiry_days: 7,
        quantity: 1.0,
        unit: Unit::Piece,
    }
}

// ── Tests ──
