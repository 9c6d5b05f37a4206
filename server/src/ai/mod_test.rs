use super::*;

#[test]
fn text_passes_through() {
    assert_eq!(reply_for(Ok("hello".into())), "hello");
}

#[test]
fn blank_text_and_empty_error_read_as_no_response() {
    assert_eq!(reply_for(Ok("  \n".into())), EMPTY_REPLY);
    assert_eq!(reply_for(Err(AiError::Empty)), EMPTY_REPLY);
}

#[test]
fn missing_key_has_its_own_reply() {
    assert_eq!(reply_for(Err(AiError::MissingApiKey)), MISSING_KEY_REPLY);
}

#[test]
fn transport_and_provider_errors_collapse_to_generic_failure() {
    assert_eq!(reply_for(Err(AiError::ApiRequest("timeout".into()))), FAILURE_REPLY);
    assert_eq!(reply_for(Err(AiError::ApiResponse { status: 500, body: String::new() })), FAILURE_REPLY);
    assert_eq!(reply_for(Err(AiError::ApiParse("bad json".into()))), FAILURE_REPLY);
}
