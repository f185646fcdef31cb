use dexview_sdk::types::Record;
use dexview_sdk::utils::{display_name, format_height, format_record_id, format_weight};
use std::fmt::Write;

use super::Palette;

const BAR_WIDTH: usize = 20;

pub fn render(record: &Record, palette: Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        palette.accent(&format_record_id(record.id)),
        palette.heading(&display_name(&record.name))
    );

    let categories: Vec<&str> = record.categories.iter().map(String::as_str).collect();
    let _ = writeln!(out, "Types:   {}", categories.join(", "));
    let _ = writeln!(
        out,
        "Height:  {}   Weight: {}",
        format_height(record.height),
        format_weight(record.weight)
    );
    if let Some(exp) = record.base_experience {
        let _ = writeln!(out, "Base experience: {}", exp);
    }

    if !record.abilities.is_empty() {
        let abilities: Vec<String> = record
            .abilities
            .iter()
            .map(|a| {
                if a.hidden {
                    format!("{} (hidden)", a.name)
                } else {
                    a.name.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "Abilities: {}", abilities.join(", "));
    }

    if !record.attributes.is_empty() {
        let _ = writeln!(out, "{}", palette.heading("Stats"));
        for attribute in &record.attributes {
            let filled = (attribute.ratio() * BAR_WIDTH as f64).round() as usize;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            let _ = writeln!(
                out,
                "  {:<12} {:>3}  {}",
                attribute.display_name(),
                attribute.value,
                palette.dim(&bar)
            );
        }
    }

    let _ = writeln!(out, "Image:   {}", record.image_url());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexview_sdk::types::{Ability, Media};

    #[test]
    fn test_render_detail_plain() {
        let mut record = Record::new(25, "pikachu")
            .with_category("electric")
            .with_attribute("hp", 35)
            .with_attribute("special-attack", 50)
            .with_media(Media {
                primary_image_url: None,
                fallback_image_url: Some("https://img.test/25.png".to_string()),
            });
        record.height = 4;
        record.weight = 60;
        record.base_experience = Some(112);
        record.abilities = vec![
            Ability {
                name: "static".to_string(),
                hidden: false,
                slot: 1,
            },
            Ability {
                name: "lightning-rod".to_string(),
                hidden: true,
                slot: 3,
            },
        ];

        insta::assert_snapshot!(render(&record, Palette::plain()), @r"
        #025 Pikachu
        Types:   electric
        Height:  0.4 m   Weight: 6.0 kg
        Base experience: 112
        Abilities: static, lightning-rod (hidden)
        Stats
          HP            35  ███░░░░░░░░░░░░░░░░░
          Sp. Attack    50  ████░░░░░░░░░░░░░░░░
        Image:   https://img.test/25.png
        ");
    }

    #[test]
    fn test_render_without_optional_sections() {
        let record = Record::new(132, "ditto");
        let out = render(&record, Palette::plain());
        assert!(!out.contains("Abilities"));
        assert!(!out.contains("Stats"));
        assert!(out.contains("https://placehold.co/96x96?text=Pokemon"));
    }
}
