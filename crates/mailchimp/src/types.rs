use crate::SUBSCRIBED_STATUS;
use serde::Serialize;

/// Body of `POST /lists/{list_id}/members/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email_address: String,
    pub status: &'static str,
}

impl SubscribeRequest {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self { email_address: email_address.into(), status: SUBSCRIBED_STATUS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subscribe_request_encodes_address_and_status() {
        let body = serde_json::to_string(&SubscribeRequest::new("a@b.com")).unwrap();
        assert_eq!(body, r#"{"email_address":"a@b.com","status":"subscribed"}"#);

        let decoded: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, json!({"email_address": "a@b.com", "status": "subscribed"}));
    }

    #[test]
    fn address_is_not_validated() {
        let body = serde_json::to_value(SubscribeRequest::new("not an address")).unwrap();
        assert_eq!(body["email_address"], "not an address");
    }
}
