// ── Types ──

use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FreshkeepError;

/// Category a food item is filed under in the pantry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodCategory {
    Produce,
    Dairy,
    Protein,
    Drinks,
    Grains,
    Condiments,
    Snacks,
    Frozen,
    Prepared,
    Other,
}

/// Unit of measure for a pantry item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Piece,
    Cup,
    Lb,
    Kg,
    Carton,
    Bottle,
    Bag,
    Can,
    Block,
    Loaf,
    Container,
    Head,
    Bunch,
    Ear,
    Stick,
    Package,
    Jar,
    Box,
    Slice,
}

/// Canonical metadata for a resolved food identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    pub category: FoodCategory,
    pub emoji: String,
    pub expiry_days: u32,
    pub quantity: f64,
    pub unit: Unit,
}

/// Which precedence tier produced a resolution. Confidence display only,
/// never control flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Heuristic,
    Fallback,
}

/// Output of one resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedItem {
    /// Original input, preserved verbatim for audit and display.
    pub raw_label: String,
    pub record: FoodRecord,
    pub match_kind: MatchKind,
}

/// An in-progress inventory entry as edited in a confirmation UI before
/// persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftItem {
    pub name: String,
    pub category: FoodCategory,
    pub emoji: String,
    pub quantity: f64,
    pub unit: Unit,
    /// Set by the UI once the user changes the unit by hand; re-resolution
    /// must not overwrite a hand-picked unit.
    #[serde(default)]
    pub unit_edited: bool,
    pub expires_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Urgency bucket for an item's remaining shelf life.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    Urgent,
    Soon,
    Fresh,
}

// ── Helpers ──

impl DraftItem {
    /// Build a draft entry from a resolution, anchoring the expiry date at
    /// `today + expiry_days`.
    pub fn from_resolution(resolved: &ResolvedItem, today: NaiveDate) -> Self {
        let record = &resolved.record;
        Self {
            name: record.name.clone(),
            category: record.category,
            emoji: record.emoji.clone(),
            quantity: record.quantity,
            unit: record.unit,
            unit_edited: false,
            expires_on: today + Duration::days(i64::from(record.expiry_days)),
            notes: None,
        }
    }

    /// Whole days until the item expires. Negative once it is past due.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expires_on - today).num_days()
    }
}

impl ExpiryStatus {
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left <= 0 {
            ExpiryStatus::Expired
        } else if days_left <= 2 {
            ExpiryStatus::Urgent
        } else if days_left <= 5 {
            ExpiryStatus::Soon
        } else {
            ExpiryStatus::Fresh
        }
    }

    /// Human-readable countdown label for alert badges.
    pub fn countdown_label(days_left: i64) -> String {
        if days_left <= 0 {
            "Expired".to_string()
        } else if days_left == 1 {
            "1 day left".to_string()
        } else {
            format!("{} days left", days_left)
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FoodCategory::Produce => "Produce",
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Protein => "Protein",
            FoodCategory::Drinks => "Drinks",
            FoodCategory::Grains => "Grains",
            FoodCategory::Condiments => "Condiments",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Frozen => "Frozen",
            FoodCategory::Prepared => "Prepared",
            FoodCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FoodCategory {
    type Err = FreshkeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "produce" => Ok(FoodCategory::Produce),
            "dairy" => Ok(FoodCategory::Dairy),
            "protein" => Ok(FoodCategory::Protein),
            "drinks" => Ok(FoodCategory::Drinks),
            "grains" => Ok(FoodCategory::Grains),
            "condiments" => Ok(FoodCategory::Condiments),
            "snacks" => Ok(FoodCategory::Snacks),
            "frozen" => Ok(FoodCategory::Frozen),
            "prepared" => Ok(FoodCategory::Prepared),
            "other" => Ok(FoodCategory::Other),
            _ => Err(FreshkeepError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Unit::Piece => "piece",
            Unit::Cup => "cup",
            Unit::Lb => "lb",
            Unit::Kg => "kg",
            Unit::Carton => "carton",
            Unit::Bottle => "bottle",
            Unit::Bag => "bag",
            Unit::Can => "can",
            Unit::Block => "block",
            Unit::Loaf => "loaf",
            Unit::Container => "container",
            Unit::Head => "head",
            Unit::Bunch => "bunch",
            Unit::Ear => "ear",
            Unit::Stick => "stick",
            Unit::Package => "package",
            Unit::Jar => "jar",
            Unit::Box => "box",
            Unit::Slice => "slice",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Unit {
    type Err = FreshkeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "piece" => Ok(Unit::Piece),
            "cup" => Ok(Unit::Cup),
            "lb" => Ok(Unit::Lb),
            "kg" => Ok(Unit::Kg),
            "carton" => Ok(Unit::Carton),
            "bottle" => Ok(Unit::Bottle),
            "bag" => Ok(Unit::Bag),
            "can" => Ok(Unit::Can),
            "block" => Ok(Unit::Block),
            "loaf" => Ok(Unit::Loaf),
            "container" => Ok(Unit::Container),
            "head" => Ok(Unit::Head),
            "bunch" => Ok(Unit::Bunch),
            "ear" => Ok(Unit::Ear),
            "stick" => Ok(Unit::Stick),
            "package" => Ok(Unit::Package),
            "jar" => Ok(Unit::Jar),
            "box" => Ok(Unit::Box),
            "slice" => Ok(Unit::Slice),
            _ => Err(FreshkeepError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact"),
            MatchKind::Partial => write!(f, "partial"),
            MatchKind::Heuristic => write!(f, "heuristic"),
            MatchKind::Fallback => write!(f, "fallback"),
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FoodRecord {
        FoodRecord {
            name: "Banana".to_string(),
            category: FoodCategory::Produce,
            emoji: "🍌".to_string(),
            expiry_days: 5,
            quantity: 1.0,
            unit: Unit::Piece,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for s in [
            "Produce",
            "Dairy",
            "Protein",
            "Drinks",
            "Grains",
            "Condiments",
            "Snacks",
            "Frozen",
            "Prepared",
            "Other",
        ] {
            let cat: FoodCategory = s.parse().unwrap();
            assert_eq!(cat.to_string(), s);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("produce".parse::<FoodCategory>().unwrap(), FoodCategory::Produce);
        assert_eq!("PRODUCE".parse::<FoodCategory>().unwrap(), FoodCategory::Produce);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "cleaning supplies".parse::<FoodCategory>().unwrap_err();
        assert!(err.to_string().contains("cleaning supplies"));
    }

    #[test]
    fn test_unit_round_trip() {
        for s in ["piece", "lb", "carton", "bunch", "ear", "slice"] {
            let unit: Unit = s.parse().unwrap();
            assert_eq!(unit.to_string(), s);
        }
    }

    #[test]
    fn test_record_serde_shape() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["name"], "Banana");
        assert_eq!(json["category"], "Produce");
        assert_eq!(json["unit"], "piece");
        assert_eq!(json["expiry_days"], 5);
    }

    #[test]
    fn test_draft_from_resolution() {
        let resolved = ResolvedItem {
            raw_label: "banana".to_string(),
            record: sample_record(),
            match_kind: MatchKind::Exact,
        };
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let draft = DraftItem::from_resolution(&resolved, today);

        assert_eq!(draft.name, "Banana");
        assert_eq!(draft.expires_on, NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());
        assert_eq!(draft.days_left(today), 5);
        assert!(!draft.unit_edited);
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_expiry_status_thresholds() {
        assert_eq!(ExpiryStatus::from_days_left(-1), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days_left(0), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days_left(1), ExpiryStatus::Urgent);
        assert_eq!(ExpiryStatus::from_days_left(2), ExpiryStatus::Urgent);
        assert_eq!(ExpiryStatus::from_days_left(3), ExpiryStatus::Soon);
        assert_eq!(ExpiryStatus::from_days_left(5), ExpiryStatus::Soon);
        assert_eq!(ExpiryStatus::from_days_left(6), ExpiryStatus::Fresh);
    }

    #[test]
    fn test_countdown_label() {
        assert_eq!(ExpiryStatus::countdown_label(0), "Expired");
        assert_eq!(ExpiryStatus::countdown_label(1), "1 day left");
        assert_eq!(ExpiryStatus::countdown_label(4), "4 days left");
    }
}
