use super::*;

fn user_json() -> &'static str {
    r#"{
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "avatar_url": null,
        "role": "author",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    }"#
}

// =============================================================
// Role and user parsing
// =============================================================

#[test]
fn user_role_parses_lowercase_names() {
    assert_eq!(serde_json::from_str::<UserRole>(r#""user""#).unwrap(), UserRole::User);
    assert_eq!(serde_json::from_str::<UserRole>(r#""author""#).unwrap(), UserRole::Author);
    assert_eq!(serde_json::from_str::<UserRole>(r#""admin""#).unwrap(), UserRole::Admin);
}

#[test]
fn user_role_rejects_unknown_names() {
    assert!(serde_json::from_str::<UserRole>(r#""root""#).is_err());
}

#[test]
fn user_parses_with_null_avatar() {
    let user: User = serde_json::from_str(user_json()).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, UserRole::Author);
    assert!(user.avatar_url.is_none());
}

#[test]
fn auth_response_parses_token_pair_and_user() {
    let json = format!(
        r#"{{"access_token":"t1","refresh_token":"r1","user":{}}}"#,
        user_json()
    );
    let resp: AuthResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.access_token, "t1");
    assert_eq!(resp.refresh_token, "r1");
    assert_eq!(resp.user.username, "alice");
}

// =============================================================
// Post / comment shapes
// =============================================================

#[test]
fn post_defaults_optional_expansions() {
    let json = r#"{
        "id": 1,
        "title": "Hello",
        "slug": "hello",
        "content": "body",
        "status": "published",
        "author_id": 7,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.status, PostStatus::Published);
    assert!(post.author.is_none());
    assert!(post.categories.is_empty());
    assert!(post.tags.is_empty());
}

#[test]
fn comment_defaults_missing_parent_and_user() {
    let json = r#"{
        "id": 3,
        "post_id": 1,
        "content": "nice post",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert!(comment.parent_id.is_none());
    assert!(comment.user.is_none());
    assert!(comment.user_id.is_none());
}

#[test]
fn update_post_request_skips_unset_fields() {
    let req = UpdatePostRequest {
        title: Some("New title".to_owned()),
        ..UpdatePostRequest::default()
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"title":"New title"}"#);
}

#[test]
fn category_and_tag_requests_skip_unset_fields() {
    let create = CreateCategoryRequest {
        name: "Rust".to_owned(),
        description: None,
    };
    assert_eq!(serde_json::to_string(&create).unwrap(), r#"{"name":"Rust"}"#);

    let update = UpdateCategoryRequest {
        description: Some("Systems programming".to_owned()),
        ..UpdateCategoryRequest::default()
    };
    assert_eq!(
        serde_json::to_string(&update).unwrap(),
        r#"{"description":"Systems programming"}"#
    );

    let tag = CreateTagRequest { name: "wasm".to_owned() };
    assert_eq!(serde_json::to_string(&tag).unwrap(), r#"{"name":"wasm"}"#);

    let rename = UpdateTagRequest { name: Some("webassembly".to_owned()) };
    assert_eq!(serde_json::to_string(&rename).unwrap(), r#"{"name":"webassembly"}"#);
}

#[test]
fn create_comment_request_skips_missing_parent() {
    let req = CreateCommentRequest {
        post_id: 1,
        content: "hi".to_owned(),
        parent_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"post_id":1,"content":"hi"}"#);
}

#[test]
fn paginated_envelope_parses() {
    let json = r#"{"items":[{"id":2,"name":"Rust","slug":"rust"}],"total":1,"page":1,"size":10,"pages":1}"#;
    let page: Paginated<Tag> = serde_json::from_str(json).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Rust");
    assert_eq!(page.pages, 1);
}

#[test]
fn error_body_parses_with_and_without_code() {
    let plain: ErrorBody = serde_json::from_str(r#"{"detail":"invalid credentials"}"#).unwrap();
    assert_eq!(plain.detail, "invalid credentials");
    assert!(plain.code.is_none());

    let coded: ErrorBody =
        serde_json::from_str(r#"{"detail":"slug taken","code":"duplicate_slug"}"#).unwrap();
    assert_eq!(coded.code.as_deref(), Some("duplicate_slug"));
}
