pub mod error;
pub mod types;

pub use error::{FreshkeepError, Result};
pub use types::{
    DraftItem, ExpiryStatus, FoodCategory, FoodRecord, MatchKind, ResolvedItem, Unit,
};
