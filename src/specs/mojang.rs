// src/specs/mojang.rs
//! Username → UUID via the Mojang profile API.
//!
//! `GET https://api.mojang.com/users/profiles/minecraft/<name>` answers
//! `{"id": "<32 hex digits>", "name": "<name>"}`; unknown names answer 204/404.

use serde_json::Value;
use uuid::Uuid;

use crate::config::consts::MOJANG_PROFILE_URL;
use crate::core::{FetchError, HttpClient};
use super::{NameResolver, PlayerId};

pub struct MojangResolver {
    client: HttpClient,
}

impl MojangResolver {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl NameResolver for MojangResolver {
    fn resolve(&self, name: &str) -> Result<PlayerId, FetchError> {
        let url = join!(MOJANG_PROFILE_URL, name);
        let body = self.client.get_json(&url, &[])?;
        parse_profile(&body)
    }
}

pub fn parse_profile(body: &Value) -> Result<PlayerId, FetchError> {
    let id = body
        .get("id")
        .and_then(Value::as_str)
        .ok_or(FetchError::MissingField("id"))?;
    Uuid::parse_str(id).map_err(|e| FetchError::Api(format!("bad player id {id:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_simple_form_id() {
        let id = parse_profile(&json!({ "id": "069a79f444e94726a5befca90e38aaf5", "name": "Notch" })).unwrap();
        assert_eq!(id.hyphenated().to_string(), "069a79f4-44e9-4726-a5be-fca90e38aaf5");
    }

    #[test]
    fn missing_or_bad_id_is_an_error() {
        assert!(matches!(parse_profile(&json!({ "name": "x" })), Err(FetchError::MissingField("id"))));
        assert!(matches!(parse_profile(&json!({ "id": 12 })), Err(FetchError::MissingField("id"))));
        assert!(matches!(parse_profile(&json!({ "id": "nope" })), Err(FetchError::Api(_))));
    }
}
