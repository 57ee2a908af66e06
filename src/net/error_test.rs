use super::*;

#[test]
fn from_response_keeps_backend_detail_verbatim() {
    let err = ApiError::from_response(401, r#"{"detail":"invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: "invalid credentials".to_owned(),
            code: None,
        }
    );
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn from_response_carries_optional_code() {
    let err = ApiError::from_response(409, r#"{"detail":"username taken","code":"duplicate"}"#);
    match err {
        ApiError::Status { status, detail, code } => {
            assert_eq!(status, 409);
            assert_eq!(detail, "username taken");
            assert_eq!(code.as_deref(), Some("duplicate"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_response_falls_back_on_non_json_body() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            detail: "request failed: 502".to_owned(),
            code: None,
        }
    );
}

#[test]
fn status_accessor_only_reports_backend_rejections() {
    assert_eq!(ApiError::from_response(404, "{}").status(), Some(404));
    assert_eq!(ApiError::Transport("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).status(), None);
}
