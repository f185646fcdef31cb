/// Format a record id with a hash prefix and three-digit padding (`1` -> `#001`).
pub fn format_record_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Convert decimetres to a metre label (`7` -> `0.7 m`).
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", f64::from(decimetres) / 10.0)
}

/// Convert hectograms to a kilogram label (`69` -> `6.9 kg`).
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Capitalize the first character, as the catalog shows names.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect::<String>() + "..."
    }
}
