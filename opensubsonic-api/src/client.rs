//! HTTP client for the OpenSubsonic REST API.
//!
//! Every endpoint is a GET request to `<server-url>/rest/<endpoint>` whose
//! query string carries six fixed parameters plus the endpoint-specific
//! ones:
//!
//! | Param | Value |
//! |-------|-------|
//! | `u`   | username |
//! | `t`   | MD5 token (see [`crate::auth`]) |
//! | `s`   | salt the token was derived with |
//! | `v`   | supported API version |
//! | `c`   | client name |
//! | `f`   | `"json"` |
//!
//! The server wraps every answer in the [`SubsonicResponse`] envelope under
//! a top-level `"subsonic-response"` key. [`SubsonicClient::get_req`] parses
//! the envelope, then resolves the endpoint's payload key into one of three
//! outcomes:
//!
//! 1. the key is present — its value is decoded into the payload type and
//!    attached, whatever the `status` says (servers return partial or empty
//!    collections with status `"ok"`);
//! 2. the key is absent but `status` is `"ok"` — a bare acknowledgement,
//!    returned with no payload;
//! 3. the key is absent, `status` is not `"ok"`, and an `error` object is
//!    present — the envelope is returned as-is and the per-endpoint check
//!    turns it into [`SubsonicError::Api`].
//!
//! Anything else is an unrecognized response shape and fails with code 500,
//! message `"unknown key"`.
//!
//! API methods are implemented in separate modules (`system`, `browsing`,
//! `lists`, `search`, `playlist`, `annotation`) as `impl SubsonicClient`
//! blocks.

use crate::auth::Session;
use crate::error::{Result, SubsonicError};
use crate::types::{ApiError, SubsonicResponse};
use crate::API_VERSION;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("opensubsonic-api/", env!("CARGO_PKG_VERSION"));

/// Blocking client for one OpenSubsonic server.
///
/// Holds the credentials and the live salt/token [`Session`]. One client
/// handle is one logical session: [`authenticate`](Self::authenticate) is
/// the only method that mutates it (and takes `&mut self` for exactly that
/// reason); every other call is read-only and can be shared freely once
/// authentication has succeeded.
pub struct SubsonicClient {
    http: Client,
    /// Server URL with `/rest/` appended.
    base_url: String,
    username: String,
    password: String,
    client_name: String,
    session: Session,
}

impl SubsonicClient {
    /// Create a client for `server_url` (no trailing slash).
    ///
    /// The client starts unauthenticated: requests are sent with an empty
    /// token and salt, which any server rejects with error code 40. Call
    /// [`authenticate`](Self::authenticate) first.
    pub fn new(
        server_url: &str,
        username: &str,
        password: &str,
        client_name: &str,
    ) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: format!("{server_url}/rest/"),
            username: username.to_owned(),
            password: password.to_owned(),
            client_name: client_name.to_owned(),
            session: Session::default(),
        })
    }

    /// Return the current salt/token session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Derive a fresh salt/token pair and validate it with a `ping` probe.
    ///
    /// Must be called once before any other endpoint. Returns the ping
    /// envelope when the server accepts the credentials; returns the
    /// server's error (code 40 for bad credentials) or the transport
    /// failure otherwise. A rejected attempt keeps the newly derived pair —
    /// subsequent calls reuse it and fail the same way until `authenticate`
    /// succeeds.
    pub fn authenticate(&mut self) -> Result<SubsonicResponse<ApiError>> {
        self.session = Session::generate(&self.password);

        let response = self.ping()?;
        if response.status == "ok" {
            Ok(response)
        } else {
            let error = response.error.unwrap_or_default();
            warn!(code = error.code, "authentication rejected");
            Err(SubsonicError::from(error))
        }
    }

    /// Issue a GET request to `endpoint` and decode the envelope.
    ///
    /// `params` are the endpoint-specific query parameters, appended after
    /// the six fixed ones in order; repeated keys are allowed. `key` is the
    /// envelope field holding this endpoint's payload.
    pub(crate) fn get_req<T>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        key: &str,
    ) -> Result<SubsonicResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("u", self.username.clone()),
            ("t", self.session.token.clone()),
            ("s", self.session.salt.clone()),
            ("v", API_VERSION.to_owned()),
            ("c", self.client_name.clone()),
            ("f", "json".to_owned()),
        ];
        query.extend(params.iter().map(|(name, value)| (*name, value.clone())));

        debug!(endpoint, url = %url, "sending request");

        let response = self.http.get(&url).query(&query).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SubsonicError::Transport {
                code: u32::from(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected HTTP status")
                    .to_owned(),
            });
        }

        decode_envelope(&response.text()?, key)
    }
}

/// Parse a response body into an envelope and resolve the payload key.
///
/// See the module docs for the three-way outcome split.
pub(crate) fn decode_envelope<T>(body: &str, key: &str) -> Result<SubsonicResponse<T>>
where
    T: DeserializeOwned,
{
    let json: Value = serde_json::from_str(body)?;
    let Some(root) = json.get("subsonic-response") else {
        return Err(unknown_key());
    };

    let mut response: SubsonicResponse<T> = serde_json::from_value(root.clone())?;

    if let Some(payload) = root.get(key) {
        response.data = Some(serde_json::from_value(payload.clone())?);
        Ok(response)
    } else if response.status == "ok" || root.get("error").is_some() {
        Ok(response)
    } else {
        Err(unknown_key())
    }
}

fn unknown_key() -> SubsonicError {
    SubsonicError::Api {
        code: 500,
        message: "unknown key".to_owned(),
    }
}

/// Unwrap the payload of a checked endpoint.
///
/// Status `"ok"` yields the payload (its zero value when the success
/// carried none); anything else yields the envelope's error object.
pub(crate) fn check<T: Default>(response: SubsonicResponse<T>) -> Result<T> {
    if response.status == "ok" {
        Ok(response.data.unwrap_or_default())
    } else {
        Err(SubsonicError::from(response.error.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiError, RandomSongs};

    fn envelope(inner: &str) -> String {
        format!(
            r#"{{"subsonic-response":{{
                "status":"ok","version":"1.16.1","type":"navidrome",
                "serverVersion":"0.54.0","openSubsonic":true{inner}}}}}"#
        )
    }

    #[test]
    fn payload_key_present_attaches_data() {
        let body = envelope(r#","randomSongs":{"song":[{"id":"1","isDir":false,"title":"a"}]}"#);
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(&body, "randomSongs").unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.data.unwrap().song.len(), 1);
    }

    #[test]
    fn empty_collection_is_data_not_bare_success() {
        let body = envelope(r#","randomSongs":{}"#);
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(&body, "randomSongs").unwrap();
        let data = response.data.expect("payload key was present");
        assert!(data.song.is_empty());
    }

    #[test]
    fn bare_success_has_no_data() {
        let body = envelope("");
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(&body, "randomSongs").unwrap();
        assert_eq!(response.status, "ok");
        assert!(response.data.is_none());
    }

    #[test]
    fn payload_decoded_even_when_status_failed() {
        let body = r#"{"subsonic-response":{
            "status":"failed","version":"1.16.1","type":"navidrome",
            "serverVersion":"0.54.0","openSubsonic":true,
            "error":{"code":40,"message":"Wrong username or password"}}}"#;
        let response: SubsonicResponse<ApiError> = decode_envelope(body, "error").unwrap();
        assert_eq!(response.status, "failed");
        assert_eq!(response.data.as_ref().unwrap().code, 40);
        assert_eq!(response.error.as_ref().unwrap().code, 40);
    }

    #[test]
    fn failed_status_with_error_object_still_decodes() {
        let body = r#"{"subsonic-response":{
            "status":"failed","version":"1.16.1","type":"navidrome",
            "serverVersion":"0.54.0","openSubsonic":true,
            "error":{"code":70,"message":"not found"}}}"#;
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(body, "randomSongs").unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.error.unwrap().code, 70);
    }

    #[test]
    fn unrecognized_shape_fails_with_unknown_key() {
        let body = r#"{"subsonic-response":{
            "status":"failed","version":"1.16.1","type":"navidrome",
            "serverVersion":"0.54.0","openSubsonic":true}}"#;
        let err = decode_envelope::<RandomSongs>(body, "randomSongs").unwrap_err();
        assert!(matches!(
            err,
            SubsonicError::Api { code: 500, ref message } if message == "unknown key"
        ));
    }

    #[test]
    fn missing_wrapper_fails_with_unknown_key() {
        let err = decode_envelope::<RandomSongs>(r#"{"status":"ok"}"#, "randomSongs").unwrap_err();
        assert!(matches!(err, SubsonicError::Api { code: 500, .. }));
    }

    #[test]
    fn missing_mandatory_envelope_field_is_a_json_error() {
        let body = r#"{"subsonic-response":{"status":"ok","version":"1.16.1"}}"#;
        let err = decode_envelope::<RandomSongs>(body, "randomSongs").unwrap_err();
        assert!(matches!(err, SubsonicError::Json(_)));
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = decode_envelope::<RandomSongs>("<html>nope</html>", "randomSongs").unwrap_err();
        assert!(matches!(err, SubsonicError::Json(_)));
    }

    #[test]
    fn check_unwraps_ok_and_defaults_missing_payload() {
        let body = envelope("");
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(&body, "randomSongs").unwrap();
        let data = check(response).unwrap();
        assert!(data.song.is_empty());
    }

    #[test]
    fn check_surfaces_server_error() {
        let body = r#"{"subsonic-response":{
            "status":"failed","version":"1.16.1","type":"navidrome",
            "serverVersion":"0.54.0","openSubsonic":true,
            "error":{"code":70,"message":"album not found"}}}"#;
        let response: SubsonicResponse<RandomSongs> =
            decode_envelope(body, "randomSongs").unwrap();
        let err = check(response).unwrap_err();
        assert!(matches!(
            err,
            SubsonicError::Api { code: 70, ref message } if message == "album not found"
        ));
    }
}
