// src/specs/hypixel.rs
//! UUID → statistics document via the Hypixel player API.
//!
//! `GET https://api.hypixel.net/v2/player?uuid=<uuid>` with the `API-Key` header.
//! The whole JSON root is the document, so score paths start at `player.`.

use serde_json::Value;

use crate::config::consts::{API_KEY_HEADER, HYPIXEL_PLAYER_URL};
use crate::core::{FetchError, HttpClient};
use super::{PlayerId, StatsSource};

pub struct HypixelStats {
    client: HttpClient,
    api_key: String,
}

impl HypixelStats {
    pub fn new(client: HttpClient, api_key: impl Into<String>) -> Self {
        Self { client, api_key: api_key.into() }
    }
}

impl StatsSource for HypixelStats {
    fn fetch(&self, id: &PlayerId) -> Result<Value, FetchError> {
        let url = format!("{HYPIXEL_PLAYER_URL}?uuid={}", id.simple());
        let body = self.client.get_json(&url, &[(API_KEY_HEADER, self.api_key.as_str())])?;
        check_success(body)
    }
}

/// `{"success": false, "cause": "..."}` is a failure even with a 2xx status.
pub fn check_success(body: Value) -> Result<Value, FetchError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let cause = body.get("cause").and_then(Value::as_str).unwrap_or("unknown cause");
        return Err(FetchError::Api(s!(cause)));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_body_is_the_document() {
        let body = json!({ "success": true, "player": { "stats": {} } });
        assert_eq!(check_success(body.clone()).unwrap(), body);
    }

    #[test]
    fn unsuccessful_body_reports_cause() {
        let err = check_success(json!({ "success": false, "cause": "Invalid API key" })).unwrap_err();
        assert_eq!(err.to_string(), "API error: Invalid API key");
    }
}
