use crate::{ErrorResponse, MailchimpError};
use reqwest::{Response, StatusCode};
use serde::de::Error as _;
use serde_json::{Deserializer, Value};

/// Classifies a response by status code.
///
/// Any status in `200..=299` is a success regardless of the body. Anything
/// else yields an [`ErrorResponse`] decoded from the body, or an empty one
/// when the body cannot be decoded. This function never fails on its own.
pub fn check_response(status: StatusCode, body: &[u8]) -> Result<(), ErrorResponse> {
    if status.is_success() {
        return Ok(());
    }
    Err(ErrorResponse::from_body(body))
}

/// Reads the whole body, classifies it and decodes a successful body as JSON.
///
/// Only the first JSON value of a successful body is decoded; anything after it
/// is ignored. The response is consumed, so its connection is released on every
/// return path.
pub async fn into_result(resp: Response) -> Result<Value, MailchimpError> {
    let status = resp.status();
    log::debug!("Mailchimp responded with {status}");

    let body = match resp.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) if status.is_success() => return Err(e.into()),
        Err(_) => Vec::new(),
    };

    check_response(status, &body)?;
    decode_first_value(&body).map_err(MailchimpError::Decode)
}

fn decode_first_value(body: &[u8]) -> Result<Value, serde_json::Error> {
    Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("empty response body")))
}
