use tutor_core::api::{
    error_message, interpret_analyze, interpret_follow_up, interpret_server_info, AnalysisKind,
    ServerInfo,
};
use tutor_core::chat::{ContentKind, MessageBody};
use tutor_core::error::TutorError;

#[test]
fn test_verbal_success_is_verbatim_markup() {
    let body = interpret_analyze(AnalysisKind::Verbal, 200, "<p>ok</p>").unwrap();
    assert_eq!(body, MessageBody::markup("<p>ok</p>"));
}

#[test]
fn test_json_kinds_extract_answer() {
    for kind in [AnalysisKind::Quant, AnalysisKind::Writing] {
        let body = interpret_analyze(kind, 200, r#"{"answer":"Outline: ..."}"#).unwrap();
        assert_eq!(body.kind, ContentKind::Plain);
        assert_eq!(body.text, "Outline: ...");
    }
}

#[test]
fn test_json_kind_with_html_body_is_an_error() {
    let err = interpret_analyze(AnalysisKind::Quant, 200, "<p>oops</p>").unwrap_err();
    assert!(matches!(err, TutorError::Json(_)));
}

#[test]
fn test_error_uses_detail() {
    let err = interpret_analyze(AnalysisKind::Verbal, 500, r#"{"detail":"bad input"}"#)
        .unwrap_err();
    match err {
        TutorError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "bad input");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_falls_back_to_status() {
    assert_eq!(error_message(500, "<html>oops</html>"), "HTTP error! status: 500");
    assert_eq!(error_message(404, r#"{"message":"x"}"#), "HTTP error! status: 404");
    assert_eq!(error_message(503, r#"{"detail":""}"#), "HTTP error! status: 503");
    assert_eq!(error_message(503, r#"{"detail":null}"#), "HTTP error! status: 503");
}

#[test]
fn test_structured_detail_is_stringified() {
    let msg = error_message(422, r#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#);
    assert!(msg.contains("field required"), "got: {msg}");
}

#[test]
fn test_follow_up_answer() {
    assert_eq!(interpret_follow_up(200, r#"{"answer":"<p>x</p>"}"#).unwrap(), "<p>x</p>");
    assert!(interpret_follow_up(404, r#"{"detail":"Not Found"}"#).is_err());
}

#[test]
fn test_server_info() {
    assert_eq!(
        interpret_server_info(200, r#"{"version":"5.3.0"}"#).unwrap(),
        ServerInfo::Version("5.3.0".into())
    );
    assert_eq!(
        interpret_server_info(200, r#"{"error":"tesseract is not installed"}"#).unwrap(),
        ServerInfo::Unavailable("tesseract is not installed".into())
    );
}
