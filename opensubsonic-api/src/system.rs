//! System endpoints: `ping`, `getLicense`.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::{ApiError, License, SubsonicResponse};

impl SubsonicClient {
    /// Test connectivity with the server.
    ///
    /// Endpoint: `ping`. Unlike the other endpoints, this returns the raw
    /// envelope even when `status` is not `"ok"` — reaching the server with
    /// wrong credentials is still a successful connectivity probe, and the
    /// embedded error (code 40) tells the caller why the session is not
    /// usable yet.
    pub fn ping(&self) -> Result<SubsonicResponse<ApiError>> {
        self.get_req("ping", &[], "error")
    }

    /// Get details about the software license.
    ///
    /// Endpoint: `getLicense`, payload key `license`.
    pub fn get_license(&self) -> Result<License> {
        let response = self.get_req("getLicense", &[], "license")?;
        check(response)
    }
}
