use super::*;

#[test]
fn current_user_endpoint_is_auth_me() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/auth/me");
}

#[test]
fn current_user_failed_message_formats_status() {
    assert_eq!(current_user_failed_message(401), "current user request failed: 401");
}
