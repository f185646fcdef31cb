//! Sample record generation.
//!
//! Records are numbered from 1 in store order. The first entries carry
//! real names and categories so filter tests read naturally.

use dexview_types::{Media, Record};

const NAMED: &[(&str, &[&str])] = &[
    ("bulbasaur", &["grass", "poison"]),
    ("ivysaur", &["grass", "poison"]),
    ("venusaur", &["grass", "poison"]),
    ("charmander", &["fire"]),
    ("charmeleon", &["fire"]),
    ("charizard", &["fire", "flying"]),
    ("squirtle", &["water"]),
    ("wartortle", &["water"]),
    ("blastoise", &["water"]),
    ("caterpie", &["bug"]),
    ("metapod", &["bug"]),
    ("butterfree", &["bug", "flying"]),
];

/// `n` records with ids `1..=n`.
pub fn sample_records(n: usize) -> Vec<Record> {
    (1..=n).map(|i| sample_record(i as u32)).collect()
}

/// The record [`sample_records`] would produce at `id`.
pub fn sample_record(id: u32) -> Record {
    let (name, categories) = match (id as usize).checked_sub(1).and_then(|i| NAMED.get(i)) {
        Some((name, categories)) => (name.to_string(), *categories),
        None => (format!("specimen-{}", id), &["normal"][..]),
    };

    let mut record = Record::new(id, name)
        .with_attribute("hp", 40 + id % 60)
        .with_media(Media {
            primary_image_url: Some(format!("https://img.test/artwork/{}.png", id)),
            fallback_image_url: None,
        });
    for category in categories {
        record = record.with_category(*category);
    }
    record.height = 5 + id % 20;
    record.weight = 60 + id * 3;
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_are_numbered_in_order() {
        let records = sample_records(15);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
        assert_eq!(records[3].name, "charmander");
        assert!(records[3].categories.contains("fire"));
        assert_eq!(records[14].name, "specimen-15");
    }
}
