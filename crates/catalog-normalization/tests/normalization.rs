//! Property tests for row normalization.

use catalog_normalization::{RawRow, normalize_row, normalize_text, parse_date_added};
use proptest::prelude::{Strategy, any, prop_assert, prop_assert_eq, prop_oneof, proptest};

fn date_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (2008i32..2022, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{y}-{m:02}-{d:02}")),
        "[a-z ]{0,12}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn derived_calendar_fields_follow_date(cell in date_cell(), year in "[0-9]{0,5}") {
        let row = RawRow::from([
            ("type".to_string(), "Movie".to_string()),
            ("date_added".to_string(), cell),
            ("release_year".to_string(), year),
        ]);
        let record = normalize_row(0, &row);
        match record.date_added {
            Some(date) => {
                use chrono::Datelike;
                prop_assert_eq!(record.year_added, Some(date.year()));
                prop_assert_eq!(record.month_added, Some(date.month()));
            }
            None => {
                prop_assert_eq!(record.year_added, None);
                prop_assert_eq!(record.month_added, None);
            }
        }
    }

    #[test]
    fn normalized_text_has_no_outer_whitespace(raw in any::<String>()) {
        if let Some(text) = normalize_text(&raw) {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(text.trim(), text.as_str());
        }
    }

    #[test]
    fn date_parsing_never_panics(raw in any::<String>()) {
        let _ = parse_date_added(&raw);
    }
}
