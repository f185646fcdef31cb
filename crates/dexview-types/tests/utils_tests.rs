use dexview_types::*;

#[test]
fn test_truncate() {
    let short = "short";
    assert_eq!(truncate(short, 10), "short");

    let long = "this is a very long string";
    let truncated = truncate(long, 10);
    assert_eq!(truncated, "this is a ...");
}

#[test]
fn test_format_record_id_pads_to_three_digits() {
    assert_eq!(format_record_id(1), "#001");
    assert_eq!(format_record_id(25), "#025");
    assert_eq!(format_record_id(151), "#151");
    assert_eq!(format_record_id(1025), "#1025");
}

#[test]
fn test_format_height_and_weight() {
    assert_eq!(format_height(7), "0.7 m");
    assert_eq!(format_height(17), "1.7 m");
    assert_eq!(format_weight(69), "6.9 kg");
    assert_eq!(format_weight(1000), "100.0 kg");
}

#[test]
fn test_display_name_capitalizes() {
    assert_eq!(display_name("bulbasaur"), "Bulbasaur");
    assert_eq!(display_name(""), "");
}

#[test]
fn test_cursor_start_is_offset_zero() {
    assert_eq!(Cursor::start().offset(), 0);
    assert_eq!(Cursor::at_offset(40).offset(), 40);
    assert!(Cursor::at_offset(20) > Cursor::start());
}

#[test]
fn test_page_result_references_keep_order() {
    let page = PageResult {
        total_count: 2,
        next_cursor: None,
        items: vec![
            RecordSummary::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            RecordSummary::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
        ],
    };
    assert!(!page.has_next());
    assert_eq!(
        page.references(),
        vec![
            "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
        ]
    );
}

#[test]
fn test_record_json_shape() {
    let record = Record {
        height: 6,
        weight: 85,
        ..Record::new(4, "charmander")
            .with_category("fire")
            .with_attribute("hp", 39)
            .with_media(Media {
                primary_image_url: Some("art.png".to_string()),
                fallback_image_url: None,
            })
    };

    insta::assert_json_snapshot!(record, @r#"
    {
      "id": 4,
      "name": "charmander",
      "attributes": [
        {
          "name": "hp",
          "value": 39
        }
      ],
      "categories": [
        "fire"
      ],
      "media": {
        "primary_image_url": "art.png"
      },
      "height": 6,
      "weight": 85
    }
    "#);
}
