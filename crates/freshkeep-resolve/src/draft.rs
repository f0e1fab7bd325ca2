//! Re-resolution of an in-progress item when its name is edited before
//! persistence.

use chrono::{Duration, NaiveDate};
use freshkeep_core::DraftItem;

use crate::resolve;

// ── Public API ──

/// Re-run resolution for a corrected name and project the refreshed metadata
/// onto a copy of the draft.
///
/// Only emoji, category, expiry date (`today + expiry_days`) and the unit are
/// overwritten, and the unit only when the user has not picked one by hand.
/// The name is kept exactly as typed; quantity and notes are never touched.
/// Idempotent for a fixed `today`.
pub fn on_name_edited(item: &DraftItem, new_name: &str, today: NaiveDate) -> DraftItem {
    let record = resolve(new_name).record;

    let mut updated = item.clone();
    updated.name = new_name.to_string();
    updated.category = record.category;
    updated.emoji = record.emoji;
    updated.expires_on = today + Duration::days(i64::from(record.expiry_days));
    if !item.unit_edited {
        updated.unit = record.unit;
    }
    updated
}

// ── Tests ──
