use crate::User;

fn sample_user() -> User {
    User {
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        age: 30,
        city: "NYC".to_string(),
        phone_number: "555-0001".to_string(),
        email: "alice@x.com".to_string(),
    }
}

#[test]
fn test_serializes_with_snake_case_field_names() {
    let json = serde_json::to_value(sample_user()).unwrap();

    assert_eq!(json["user_id"], "u1");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["age"], 30);
    assert_eq!(json["city"], "NYC");
    assert_eq!(json["phone_number"], "555-0001");
    assert_eq!(json["email"], "alice@x.com");
}

#[test]
fn test_deserializes_round_trip() {
    let user = sample_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();

    assert_eq!(back, user);
}
