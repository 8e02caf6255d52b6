use super::*;

#[test]
fn user_deserializes_full_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-1","name":"Ada Byrne","email":"ada@luceig.example","role":"admin"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email.as_deref(), Some("ada@luceig.example"));
    assert_eq!(user.role, "admin");
}

#[test]
fn user_defaults_missing_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u-2","name":"Niamh"}"#).unwrap();
    assert_eq!(user.email, None);
    assert_eq!(user.role, "staff");
}

#[test]
fn user_rejects_missing_id() {
    assert!(serde_json::from_str::<User>(r#"{"name":"No Id"}"#).is_err());
}
