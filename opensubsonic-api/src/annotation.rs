//! Media annotation endpoints: `star`, `unstar`, `setRating`, `scrobble`.
//!
//! All four are bare acknowledgements: success is an empty `"ok"` envelope.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::ApiError;

impl SubsonicClient {
    /// Star a song, album, or artist.
    ///
    /// Endpoint: `star`. The server requires at least one non-empty id
    /// among the three.
    pub fn star(
        &self,
        id: Option<&str>,
        album_id: Option<&str>,
        artist_id: Option<&str>,
    ) -> Result<()> {
        let response = self.get_req::<ApiError>("star", &annotate_ids(id, album_id, artist_id), "error")?;
        check(response).map(|_| ())
    }

    /// Remove a star from a song, album, or artist.
    ///
    /// Endpoint: `unstar`.
    pub fn unstar(
        &self,
        id: Option<&str>,
        album_id: Option<&str>,
        artist_id: Option<&str>,
    ) -> Result<()> {
        let response =
            self.get_req::<ApiError>("unstar", &annotate_ids(id, album_id, artist_id), "error")?;
        check(response).map(|_| ())
    }

    /// Set the rating of a media item.
    ///
    /// Endpoint: `setRating`. `rating` is 1..=5; 0 removes the rating.
    pub fn set_rating(&self, id: &str, rating: u32) -> Result<()> {
        let params = vec![("id", id.to_owned()), ("rating", rating.to_string())];
        let response = self.get_req::<ApiError>("setRating", &params, "error")?;
        check(response).map(|_| ())
    }

    /// Register local playback of a media item.
    ///
    /// Endpoint: `scrobble`. `time` is the playback start in milliseconds
    /// since the epoch; `submission` false records a "now playing"
    /// notification instead of a scrobble.
    pub fn scrobble(&self, id: &str, time: Option<u64>, submission: Option<bool>) -> Result<()> {
        let mut params = vec![("id", id.to_owned())];
        if let Some(time) = time {
            params.push(("time", time.to_string()));
        }
        if let Some(submission) = submission {
            params.push(("submission", submission.to_string()));
        }
        let response = self.get_req::<ApiError>("scrobble", &params, "error")?;
        check(response).map(|_| ())
    }
}

fn annotate_ids(
    id: Option<&str>,
    album_id: Option<&str>,
    artist_id: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(id) = id {
        params.push(("id", id.to_owned()));
    }
    if let Some(id) = album_id {
        params.push(("albumId", id.to_owned()));
    }
    if let Some(id) = artist_id {
        params.push(("artistId", id.to_owned()));
    }
    params
}
