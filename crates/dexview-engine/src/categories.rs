use std::collections::BTreeSet;

/// Every category the catalog knows about, in display order.
pub const CATEGORY_CATALOG: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORY_CATALOG.contains(&name)
}

/// Add `name` to the selection, or remove it if already selected.
pub fn toggle_category(selection: &BTreeSet<String>, name: &str) -> BTreeSet<String> {
    let mut next = selection.clone();
    if !next.remove(name) {
        next.insert(name.to_string());
    }
    next
}
