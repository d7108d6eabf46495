use crate::csv::parse_line;
use crate::error::CoreError;

#[test]
fn test_parse_line_valid() {
    let user = parse_line(1, "alice,u1,30,NYC,555-0001,alice@x.com").unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.age, 30);
    assert_eq!(user.city, "NYC");
    assert_eq!(user.phone_number, "555-0001");
    assert_eq!(user.email, "alice@x.com");
}

#[test]
fn test_parse_line_fields_are_not_trimmed() {
    let user = parse_line(1, " alice ,u1,30, NYC ,555-0001,alice@x.com").unwrap();

    assert_eq!(user.username, " alice ");
    assert_eq!(user.city, " NYC ");
}

#[test]
fn test_parse_line_empty_fields_are_allowed() {
    // Only the shape is validated; empty strings are legal field values
    let user = parse_line(1, ",u1,30,,,").unwrap();

    assert_eq!(user.username, "");
    assert_eq!(user.city, "");
    assert_eq!(user.email, "");
}

#[test]
fn test_parse_line_too_few_fields() {
    let result = parse_line(3, "alice,u1,30,NYC,555-0001");

    match result {
        Err(CoreError::InvalidFieldCount {
            line,
            expected,
            found,
            ..
        }) => {
            assert_eq!(line, 3);
            assert_eq!(expected, 6);
            assert_eq!(found, 5);
        }
        other => panic!("expected InvalidFieldCount, got {:?}", other),
    }
}

#[test]
fn test_parse_line_too_many_fields() {
    let result = parse_line(1, "alice,u1,30,NYC,555-0001,alice@x.com,extra");

    assert!(matches!(
        result,
        Err(CoreError::InvalidFieldCount { found: 7, .. })
    ));
}

#[test]
fn test_parse_line_empty_line_is_one_field() {
    let result = parse_line(2, "");

    assert!(matches!(
        result,
        Err(CoreError::InvalidFieldCount { found: 1, .. })
    ));
}

#[test]
fn test_parse_line_non_numeric_age() {
    let result = parse_line(5, "alice,u1,thirty,NYC,555-0001,alice@x.com");

    match result {
        Err(CoreError::InvalidAge { line, value, .. }) => {
            assert_eq!(line, 5);
            assert_eq!(value, "thirty");
        }
        other => panic!("expected InvalidAge, got {:?}", other),
    }
}

#[test]
fn test_parse_line_negative_age_parses() {
    // The format only requires an integer; range policy is not enforced here
    let user = parse_line(1, "alice,u1,-1,NYC,555-0001,alice@x.com").unwrap();

    assert_eq!(user.age, -1);
}
