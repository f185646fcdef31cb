use dexview_types::{Ability, Attribute, Cursor, Media, PageResult, Record, RecordSummary};
use reqwest::Url;

use super::schema::{ListResponse, PokemonResponse};

pub(crate) fn map_list(response: ListResponse, offset: usize) -> PageResult {
    let items: Vec<RecordSummary> = response
        .results
        .into_iter()
        .map(|r| RecordSummary::new(r.name, r.url))
        .collect();

    let next_cursor = response
        .next
        .as_deref()
        .map(|link| cursor_from_next_link(link, offset, items.len()));

    PageResult {
        total_count: response.count,
        next_cursor,
        items,
    }
}

/// Decode the `offset` query parameter of a `next` link.
///
/// Falls back to `offset + fetched` when the link carries no usable offset.
pub(crate) fn cursor_from_next_link(link: &str, offset: usize, fetched: usize) -> Cursor {
    let parsed = Url::parse(link).ok().and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "offset")
            .and_then(|(_, value)| value.parse::<usize>().ok())
    });

    Cursor::at_offset(parsed.unwrap_or(offset + fetched))
}

impl From<PokemonResponse> for Record {
    fn from(raw: PokemonResponse) -> Self {
        Record {
            id: raw.id,
            name: raw.name,
            attributes: raw
                .stats
                .into_iter()
                .map(|s| Attribute::new(s.stat.name, s.base_stat))
                .collect(),
            categories: raw.types.into_iter().map(|t| t.kind.name).collect(),
            media: Media {
                primary_image_url: raw.sprites.other.official_artwork.front_default,
                fallback_image_url: raw.sprites.front_default,
            },
            height: raw.height,
            weight: raw.weight,
            base_experience: raw.base_experience,
            abilities: raw
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                    slot: a.slot,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARMANDER: &str = r#"{
        "id": 4,
        "name": "charmander",
        "height": 6,
        "weight": 85,
        "base_experience": 62,
        "sprites": {
            "front_default": "https://img/4.png",
            "other": { "official-artwork": { "front_default": "https://art/4.png" } }
        },
        "types": [ { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } } ],
        "stats": [
            { "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 60, "effort": 1, "stat": { "name": "special-attack", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
        ]
    }"#;

    #[test]
    fn test_pokemon_maps_to_record() {
        let raw: PokemonResponse = serde_json::from_str(CHARMANDER).unwrap();
        let record = Record::from(raw);

        assert_eq!(record.id, 4);
        assert_eq!(record.name, "charmander");
        assert_eq!(record.height, 6);
        assert_eq!(record.weight, 85);
        assert_eq!(record.base_experience, Some(62));
        assert!(record.categories.contains("fire"));
        assert_eq!(record.attributes.len(), 2);
        assert_eq!(record.attributes[1].name, "special-attack");
        assert_eq!(record.attributes[1].value, 60);
        assert_eq!(record.image_url(), "https://art/4.png");
        assert_eq!(record.abilities.len(), 2);
        assert!(record.abilities[1].hidden);
    }

    #[test]
    fn test_missing_sprites_fall_back_to_placeholder() {
        let raw: PokemonResponse =
            serde_json::from_str(r#"{ "id": 10001, "name": "deoxys-attack" }"#).unwrap();
        let record = Record::from(raw);
        assert_eq!(record.image_url(), dexview_types::PLACEHOLDER_IMAGE_URL);
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_list_maps_next_link_to_cursor() {
        let raw: ListResponse = serde_json::from_str(
            r#"{
                "count": 1302,
                "next": "https://pokeapi.co/api/v2/pokemon?offset=40&limit=20",
                "previous": "https://pokeapi.co/api/v2/pokemon?offset=0&limit=20",
                "results": [
                    { "name": "spearow", "url": "https://pokeapi.co/api/v2/pokemon/21/" },
                    { "name": "fearow", "url": "https://pokeapi.co/api/v2/pokemon/22/" }
                ]
            }"#,
        )
        .unwrap();

        let page = map_list(raw, 20);
        assert_eq!(page.total_count, 1302);
        assert_eq!(page.next_cursor, Some(Cursor::at_offset(40)));
        assert_eq!(page.items[0].name, "spearow");
        assert_eq!(page.items[1].reference, "https://pokeapi.co/api/v2/pokemon/22/");
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let raw: ListResponse =
            serde_json::from_str(r#"{ "count": 3, "next": null, "results": [] }"#).unwrap();
        let page = map_list(raw, 0);
        assert_eq!(page.next_cursor, None);
        assert!(!page.has_next());
    }

    #[test]
    fn test_cursor_falls_back_when_link_has_no_offset() {
        assert_eq!(
            cursor_from_next_link("https://example.test/pokemon?page=3", 20, 20),
            Cursor::at_offset(40)
        );
        assert_eq!(cursor_from_next_link("not a url", 0, 7), Cursor::at_offset(7));
    }
}
