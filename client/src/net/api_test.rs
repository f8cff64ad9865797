use super::*;

#[test]
fn ticket_request_failed_message_formats_status() {
    assert_eq!(ticket_request_failed_message(401), "ticket request failed: 401");
    assert_eq!(ticket_request_failed_message(503), "ticket request failed: 503");
}
