use crate::SortDirection;

use std::str::FromStr;

#[test]
fn test_sort_direction_default_is_ascending() {
    assert_eq!(SortDirection::default(), SortDirection::Ascending);
}

#[test]
fn test_sort_direction_as_str() {
    assert_eq!(SortDirection::Ascending.as_str(), "ascending");
    assert_eq!(SortDirection::Descending.as_str(), "descending");
}

#[test]
fn test_sort_direction_as_sql() {
    assert_eq!(SortDirection::Ascending.as_sql(), "ASC");
    assert_eq!(SortDirection::Descending.as_sql(), "DESC");
}

#[test]
fn test_sort_direction_from_str() {
    assert_eq!(
        SortDirection::from_str("ascending").unwrap(),
        SortDirection::Ascending
    );
    assert_eq!(
        SortDirection::from_str("descending").unwrap(),
        SortDirection::Descending
    );
}

#[test]
fn test_sort_direction_from_str_rejects_unknown() {
    assert!(SortDirection::from_str("sideways").is_err());
    assert!(SortDirection::from_str("ASCENDING").is_err());
}

#[test]
fn test_sort_direction_deserializes_from_lowercase() {
    let direction: SortDirection = serde_json::from_str("\"descending\"").unwrap();
    assert_eq!(direction, SortDirection::Descending);
}
