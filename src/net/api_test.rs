use super::*;

// =============================================================
// interpret_login_response
// =============================================================

#[test]
fn ok_status_yields_session_record() {
    let user = interpret_login_response(200, r#"{"user_name":"alice","email":"a@b.co"}"#).unwrap();
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn ok_status_with_garbage_body_is_transport_failure() {
    assert!(matches!(interpret_login_response(200, "<html>"), Err(AuthError::Transport(_))));
}

#[test]
fn rejection_surfaces_server_message() {
    assert_eq!(
        interpret_login_response(401, r#"{"message":"wrong password"}"#),
        Err(AuthError::Rejected {
            message: Some("wrong password".to_owned())
        })
    );
}

#[test]
fn rejection_without_message_has_none() {
    for body in [r#"{"message":""}"#, "{}", "Bad Gateway"] {
        assert_eq!(
            interpret_login_response(502, body),
            Err(AuthError::Rejected { message: None }),
            "body={body}"
        );
    }
}

#[test]
fn only_200_counts_as_success() {
    let body = r#"{"user_name":"alice"}"#;
    assert!(matches!(interpret_login_response(201, body), Err(AuthError::Rejected { .. })));
}

// =============================================================
// interpret_code_response
// =============================================================

#[test]
fn code_sent_only_on_success_message() {
    assert_eq!(interpret_code_response(r#"{"message":"success"}"#), Ok(()));
    assert_eq!(
        interpret_code_response(r#"{"message":"too many requests"}"#),
        Err(AuthError::Rejected {
            message: Some("too many requests".to_owned())
        })
    );
    assert_eq!(interpret_code_response("{}"), Err(AuthError::Rejected { message: None }));
}

#[test]
fn code_response_not_json_is_transport_failure() {
    assert!(matches!(interpret_code_response(""), Err(AuthError::Transport(_))));
}

// =============================================================
// interpret_google_response
// =============================================================

#[test]
fn google_redirect_wins_over_body() {
    assert_eq!(
        interpret_google_response(Some("https://site.io/en/"), "<html>"),
        Ok(GoogleLoginOutcome::Redirect("https://site.io/en/".to_owned()))
    );
}

#[test]
fn google_session_record() {
    let outcome = interpret_google_response(None, r#"{"user_name":"g","email":"g@x.io"}"#).unwrap();
    assert!(matches!(outcome, GoogleLoginOutcome::Session(user) if user.email == "g@x.io"));
}

#[test]
fn google_null_or_garbage_is_rejected() {
    assert_eq!(interpret_google_response(None, "null"), Err(AuthError::Rejected { message: None }));
    assert_eq!(interpret_google_response(Some(""), "oops"), Err(AuthError::Rejected { message: None }));
}
