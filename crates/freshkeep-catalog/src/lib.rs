//! The food knowledge base: an ordered, immutable table mapping normalized
//! keywords to canonical food metadata.
//!
//! Keys are lowercase ASCII letters only (the resolver normalizes input the
//! same way before lookup). Singular and plural variants map to the identical
//! record, and compound alias keys like `bananafruit` or `orangevegetable`
//! are first-class entries that catch noisy detector labels.
//!
//! The authored, category-grouped order of the table is a contract: the
//! resolver's partial-match scan returns the FIRST key that matches, so
//! reordering entries changes real resolutions. Append within the matching
//! category block when extending the vocabulary.

use std::sync::LazyLock;

use freshkeep_core::{FoodCategory, FoodRecord, Unit};

type Entry = (&'static str, FoodRecord);

static TABLE: LazyLock<Vec<Entry>> = LazyLock::new(build_table);

// ── Public API ──

/// Look up a keyword that must already be normalized (lowercase, letters
/// only). Absence is a valid, non-exceptional result.
pub fn lookup_exact(keyword: &str) -> Option<&'static FoodRecord> {
    TABLE.iter().find(|entry| entry.0 == keyword).map(|entry| &entry.1)
}

/// All entries in authored, category-grouped order.
pub fn entries() -> &'static [(&'static str, FoodRecord)] {
    &TABLE
}

// ── Table ──

fn record(
    name: &str,
    category: FoodCategory,
    emoji: &str,
    expiry_days: u32,
    quantity: f64,
    unit: Unit,
) -> FoodRecord {
    FoodRecord {
        name: name.to_string(),
        category,
        emoji: emoji.to_string(),
        expiry_days,
        quantity,
        unit,
    }
}

fn add(table: &mut Vec<Entry>, keys: &[&'static str], rec: FoodRecord) {
    for key in keys {
        table.push((key, rec.clone()));
    }
}

fn build_table() -> Vec<Entry> {
    use FoodCategory::*;
    use Unit::*;

    let mut t = Vec::new();

    // Fruits. `redfruit` and `yellowfruit` catch detector compounds like
    // "red fruit" after normalization.
    add(&mut t, &["apple", "apples", "redfruit"], record("Apple", Produce, "🍎", 7, 1.0, Piece));
    add(
        &mut t,
        &["banana", "bananas", "bananafruit", "yellowfruit"],
        record("Banana", Produce, "🍌", 5, 1.0, Piece),
    );
    add(&mut t, &["orange", "oranges"], record("Orange", Produce, "🍊", 7, 1.0, Piece));
    add(&mut t, &["grape", "grapes"], record("Grapes", Produce, "🍇", 7, 1.0, Bunch));
    add(
        &mut t,
        &["strawberry", "strawberries"],
        record("Strawberries", Produce, "🍓", 3, 1.0, Container),
    );
    add(
        &mut t,
        &["blueberry", "blueberries"],
        record("Blueberries", Produce, "🫐", 7, 1.0, Container),
    );
    add(&mut t, &["cherry", "cherries"], record("Cherries", Produce, "🍒", 7, 1.0, Container));
    add(&mut t, &["peach", "peaches"], record("Peach", Produce, "🍑", 5, 1.0, Piece));
    add(&mut t, &["pear", "pears"], record("Pear", Produce, "🍐", 7, 1.0, Piece));
    add(&mut t, &["lemon", "lemons"], record("Lemon", Produce, "🍋", 14, 1.0, Piece));
    add(&mut t, &["lime", "limes"], record("Lime", Produce, "🍋", 14, 1.0, Piece));
    add(&mut t, &["avocado", "avocados"], record("Avocado", Produce, "🥑", 5, 1.0, Piece));

    // Vegetables.
    add(
        &mut t,
        &["carrot", "carrots", "carrotvegetable", "orangevegetable", "rootvegetable"],
        record("Carrot", Produce, "🥕", 14, 1.0, Piece),
    );
    add(&mut t, &["tomato", "tomatoes"], record("Tomato", Produce, "🍅", 5, 1.0, Piece));
    add(&mut t, &["lettuce"], record("Lettuce", Produce, "🥬", 7, 1.0, Head));
    add(&mut t, &["onion", "onions"], record("Onion", Produce, "🧅", 30, 1.0, Piece));
    add(&mut t, &["potato", "potatoes"], record("Potato", Produce, "🥔", 21, 1.0, Piece));
    add(&mut t, &["broccoli"], record("Broccoli", Produce, "🥦", 7, 1.0, Head));
    add(&mut t, &["cucumber", "cucumbers"], record("Cucumber", Produce, "🥒", 7, 1.0, Piece));
    add(
        &mut t,
        &["pepper", "peppers", "bellpepper"],
        record("Bell Pepper", Produce, "🫑", 7, 1.0, Piece),
    );
    add(&mut t, &["corn"], record("Corn", Produce, "🌽", 5, 1.0, Ear));
    add(
        &mut t,
        &["mushroom", "mushrooms"],
        record("Mushrooms", Produce, "🍄", 5, 1.0, Container),
    );

    // Dairy.
    add(&mut t, &["milk"], record("Milk", Dairy, "🥛", 7, 1.0, Carton));
    add(&mut t, &["cheese"], record("Cheese", Dairy, "🧀", 14, 1.0, Block));
    add(&mut t, &["yogurt"], record("Yogurt", Dairy, "🥛", 10, 1.0, Container));
    add(&mut t, &["egg", "eggs"], record("Eggs", Dairy, "🥚", 21, 12.0, Piece));
    add(&mut t, &["butter"], record("Butter", Dairy, "🧈", 30, 1.0, Stick));
    add(&mut t, &["cream"], record("Cream", Dairy, "🥛", 7, 1.0, Container));

    // Protein.
    add(&mut t, &["chicken"], record("Chicken", Protein, "🍗", 3, 1.0, Lb));
    add(&mut t, &["beef"], record("Beef", Protein, "🥩", 3, 1.0, Lb));
    add(&mut t, &["fish"], record("Fish", Protein, "🐟", 2, 1.0, Piece));
    add(&mut t, &["pork"], record("Pork", Protein, "🥓", 3, 1.0, Lb));
    add(&mut t, &["bacon"], record("Bacon", Protein, "🥓", 7, 1.0, Package));
    add(&mut t, &["ham"], record("Ham", Protein, "🥩", 5, 1.0, Lb));
    add(&mut t, &["turkey"], record("Turkey", Protein, "🦃", 3, 1.0, Lb));
    add(&mut t, &["salmon"], record("Salmon", Protein, "🐟", 2, 1.0, Piece));
    add(&mut t, &["tuna"], record("Tuna", Protein, "🐟", 2, 1.0, Can));

    // Grains.
    add(&mut t, &["bread"], record("Bread", Grains, "🍞", 7, 1.0, Loaf));
    add(&mut t, &["rice"], record("Rice", Grains, "🍚", 365, 1.0, Bag));
    add(&mut t, &["pasta"], record("Pasta", Grains, "🍝", 365, 1.0, Box));
    add(&mut t, &["cereal"], record("Cereal", Grains, "🥣", 90, 1.0, Box));
    add(&mut t, &["oats"], record("Oats", Grains, "🥣", 365, 1.0, Container));
    add(&mut t, &["oatmeal"], record("Oatmeal", Grains, "🥣", 365, 1.0, Container));

    // Drinks.
    add(&mut t, &["water"], record("Water", Drinks, "💧", 365, 1.0, Bottle));
    add(&mut t, &["juice"], record("Juice", Drinks, "🧃", 14, 1.0, Bottle));
    add(&mut t, &["soda"], record("Soda", Drinks, "🥤", 365, 1.0, Can));
    add(&mut t, &["coffee"], record("Coffee", Drinks, "☕", 365, 1.0, Bag));
    add(&mut t, &["tea"], record("Tea", Drinks, "🍵", 365, 1.0, Box));
    add(&mut t, &["wine"], record("Wine", Drinks, "🍷", 365, 1.0, Bottle));
    add(&mut t, &["beer"], record("Beer", Drinks, "🍺", 365, 1.0, Bottle));

    // Snacks.
    add(&mut t, &["chocolate"], record("Chocolate", Snacks, "🍫", 365, 1.0, Piece));
    add(&mut t, &["cookies"], record("Cookies", Snacks, "🍪", 30, 1.0, Package));
    add(&mut t, &["crackers"], record("Crackers", Snacks, "🍪", 90, 1.0, Box));
    add(&mut t, &["chips"], record("Chips", Snacks, "🍟", 90, 1.0, Bag));
    add(&mut t, &["nuts"], record("Nuts", Snacks, "🥜", 180, 1.0, Bag));
    add(&mut t, &["popcorn"], record("Popcorn", Snacks, "🍿", 90, 1.0, Bag));

    // Condiments.
    add(&mut t, &["ketchup"], record("Ketchup", Condiments, "🍅", 365, 1.0, Bottle));
    add(&mut t, &["mustard"], record("Mustard", Condiments, "🌭", 365, 1.0, Bottle));
    add(
        &mut t,
        &["mayo", "mayonnaise"],
        record("Mayonnaise", Condiments, "🥪", 90, 1.0, Jar),
    );
    add(&mut t, &["oil"], record("Cooking Oil", Condiments, "🫒", 365, 1.0, Bottle));
    add(&mut t, &["vinegar"], record("Vinegar", Condiments, "🍶", 365, 1.0, Bottle));

    // Frozen.
    add(&mut t, &["icecream"], record("Ice Cream", Frozen, "🍦", 90, 1.0, Container));
    add(&mut t, &["frozenpizza"], record("Frozen Pizza", Frozen, "🍕", 90, 1.0, Piece));
    add(
        &mut t,
        &["frozenvegetables"],
        record("Frozen Vegetables", Frozen, "🥦", 365, 1.0, Bag),
    );

    // Prepared.
    add(&mut t, &["pizza"], record("Pizza", Prepared, "🍕", 3, 1.0, Slice));
    add(&mut t, &["sandwich"], record("Sandwich", Prepared, "🥪", 2, 1.0, Piece));
    add(&mut t, &["burger"], record("Burger", Prepared, "🍔", 2, 1.0, Piece));

    t
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _) in entries() {
            assert!(seen.insert(*key), "duplicate key: {}", key);
        }
    }

    #[test]
    fn test_keys_are_normalized() {
        for (key, _) in entries() {
            assert!(
                key.chars().all(|c| c.is_ascii_lowercase()),
                "key not normalized: {}",
                key
            );
        }
    }

    #[test]
    fn test_covers_common_groceries() {
        assert!(entries().len() >= 60);
    }

    #[test]
    fn test_lookup_exact() {
        let banana = lookup_exact("banana").unwrap();
        assert_eq!(banana.name, "Banana");
        assert_eq!(banana.category, FoodCategory::Produce);
        assert_eq!(banana.emoji, "🍌");
        assert_eq!(banana.expiry_days, 5);
        assert_eq!(banana.unit, Unit::Piece);

        assert!(lookup_exact("spaceship").is_none());
        assert!(lookup_exact("").is_none());
    }

    #[test]
    fn test_plural_and_singular_share_record() {
        assert_eq!(lookup_exact("apple"), lookup_exact("apples"));
        assert_eq!(lookup_exact("egg"), lookup_exact("eggs"));
        assert_eq!(lookup_exact("mayo"), lookup_exact("mayonnaise"));
    }

    #[test]
    fn test_alias_keys_are_first_class() {
        assert_eq!(lookup_exact("yellowfruit").unwrap().name, "Banana");
        assert_eq!(lookup_exact("redfruit").unwrap().name, "Apple");
        assert_eq!(lookup_exact("orangevegetable").unwrap().name, "Carrot");
        assert_eq!(lookup_exact("bellpepper").unwrap().name, "Bell Pepper");
    }

    #[test]
    fn test_authored_order_is_category_grouped() {
        // The partial-match scan depends on fruits coming before vegetables:
        // "orange" the fruit must win over the carrot aliases for plain
        // "orange" input.
        let position = |needle: &str| {
            entries()
                .iter()
                .position(|(k, _)| *k == needle)
                .unwrap_or_else(|| panic!("missing key: {}", needle))
        };
        assert!(position("orange") < position("orangevegetable"));
        assert!(position("apple") < position("carrot"));
        assert!(position("milk") < position("chicken"));
        assert!(position("corn") < position("popcorn"));
    }

    #[test]
    fn test_egg_defaults_to_a_dozen() {
        let eggs = lookup_exact("eggs").unwrap();
        assert_eq!(eggs.quantity, 12.0);
        assert_eq!(eggs.expiry_days, 21);
    }
}
