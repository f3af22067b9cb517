//! Successful webhook reply body.

use serde_json::Value;

/// Reply fields checked for the reply text, in priority order.
const REPLY_TEXT_FIELDS: [&str; 2] = ["response", "message"];

/// JSON body returned by the webhook on success.
///
/// Any JSON value other than `null` is accepted. The reply text is the first
/// non-empty string among the `response` and `message` fields of an object
/// body; other bodies carry no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply(Value);

impl WebhookReply {
    /// Wraps an already-parsed JSON body without checking it.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Wraps an already-parsed JSON body, rejecting `null`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when `value` is `null`, since such a
    /// body has no fields to read a reply from.
    pub fn try_from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Err(serde::de::Error::custom("webhook reply body is null"));
        }
        Ok(Self(value))
    }

    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `body` is not valid JSON or is
    /// the JSON literal `null`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).and_then(Self::try_from_value)
    }

    /// Returns the reply text, if the body carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier::webhook::domain::WebhookReply;
    /// use serde_json::json;
    ///
    /// let reply = WebhookReply::from_value(json!({"response": "", "message": "hi"}));
    /// assert_eq!(reply.text(), Some("hi"));
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        REPLY_TEXT_FIELDS.iter().find_map(|field| {
            self.0
                .get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
    }

    /// Returns the reply text, or `fallback` when the body carries none.
    #[must_use]
    pub fn text_or(&self, fallback: &str) -> String {
        self.text().unwrap_or(fallback).to_owned()
    }

    /// Returns the raw JSON body.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}
