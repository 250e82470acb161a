use super::*;
use mehndihub_shared::UserType;

fn stored_user() -> String {
    r#"{
        "id": "u1",
        "firstName": "Mina",
        "lastName": "Raza",
        "email": "mina@example.com",
        "userType": "client",
        "status": "active"
    }"#
    .to_string()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn bootstrap_restores_complete_session() {
    let user = restore_session(some("tok123"), Some(stored_user()), some("true"));
    let user = user.expect("complete triple should restore");
    assert_eq!(user.id, "u1");
    assert_eq!(user.user_type, UserType::Client);
}

#[test]
fn bootstrap_rejects_flag_without_token() {
    // 标志位为 "true" 但令牌缺失或是占位字符串时，必须按未登录处理
    assert!(restore_session(None, Some(stored_user()), some("true")).is_none());
    assert!(restore_session(some(""), Some(stored_user()), some("true")).is_none());
    assert!(restore_session(some("undefined"), Some(stored_user()), some("true")).is_none());
    assert!(restore_session(some("null"), Some(stored_user()), some("true")).is_none());
}

#[test]
fn bootstrap_rejects_missing_or_wrong_flag() {
    assert!(restore_session(some("tok123"), Some(stored_user()), None).is_none());
    assert!(restore_session(some("tok123"), Some(stored_user()), some("false")).is_none());
    assert!(restore_session(some("tok123"), Some(stored_user()), some("True")).is_none());
}

#[test]
fn bootstrap_rejects_corrupt_user_blob() {
    assert!(restore_session(some("tok123"), some("{not json"), some("true")).is_none());
    assert!(restore_session(some("tok123"), None, some("true")).is_none());
}

#[test]
fn login_writes_exactly_the_session_triple() {
    let user: UserProfile = serde_json::from_str(&stored_user()).unwrap();
    let writes = session_writes(Some("tok123"), &user);

    let keys: Vec<&str> = writes.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["token", "user", "isAuthenticated"]);

    let value_of = |key: &str| {
        writes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    };
    assert_eq!(value_of("token").as_deref(), Some("tok123"));
    assert_eq!(value_of("isAuthenticated").as_deref(), Some("true"));

    // 写入的资料副本必须能原样恢复为同一会话
    let restored = restore_session(
        value_of("token"),
        value_of("user"),
        value_of("isAuthenticated"),
    )
    .expect("a fresh login triple should restore");
    assert_eq!(restored, user);
}

#[test]
fn profile_refresh_keeps_existing_token() {
    // 不经过登录的资料更新只写 user 与标志位，不触碰令牌
    let user: UserProfile = serde_json::from_str(&stored_user()).unwrap();
    let keys: Vec<&str> = session_writes(None, &user).iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["user", "isAuthenticated"]);
}

#[test]
fn logout_clear_set_covers_every_written_key() {
    // 登出清空 SESSION_KEYS；任何写入计划都不会落在这三个键之外，
    // 因此无论远端登出是否成功，本地清理后都不可能残留会话
    let user: UserProfile = serde_json::from_str(&stored_user()).unwrap();
    for (key, _) in session_writes(Some("tok123"), &user) {
        assert!(SESSION_KEYS.contains(&key));
    }
    assert_eq!(SESSION_KEYS, ["token", "user", "isAuthenticated"]);

    // 清空后的三元组不可恢复会话
    assert!(restore_session(None, None, None).is_none());
}

#[test]
fn token_placeholders_count_as_absent() {
    assert_eq!(normalize_token("undefined".to_string()), None);
    assert_eq!(normalize_token("null".to_string()), None);
    assert_eq!(normalize_token(String::new()), None);
    assert_eq!(normalize_token("tok".to_string()), Some("tok".to_string()));
}

#[test]
fn session_view_mapping() {
    let loading = AuthState {
        user: None,
        is_authenticated: false,
        is_loading: true,
    };
    assert_eq!(session_view(&loading), SessionView::Unknown);

    let anonymous = AuthState {
        user: None,
        is_authenticated: false,
        is_loading: false,
    };
    assert_eq!(session_view(&anonymous), SessionView::Anonymous);

    let user: UserProfile = serde_json::from_str(&stored_user()).unwrap();
    let authed = AuthState {
        user: Some(user),
        is_authenticated: true,
        is_loading: false,
    };
    assert_eq!(
        session_view(&authed),
        SessionView::Authenticated(UserType::Client)
    );

    // 标志位置位但资料缺失：按未登录处理
    let inconsistent = AuthState {
        user: None,
        is_authenticated: true,
        is_loading: false,
    };
    assert_eq!(session_view(&inconsistent), SessionView::Anonymous);
}
