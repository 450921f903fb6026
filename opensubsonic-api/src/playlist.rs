//! Playlist endpoints: `getPlaylists`, `getPlaylist`, `createPlaylist`,
//! `updatePlaylist`, `deletePlaylist`.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::{ApiError, PlaylistWithSongs, Playlists};

impl SubsonicClient {
    /// Return all playlists the user is allowed to see.
    ///
    /// Endpoint: `getPlaylists`, payload key `playlists`. Admins may pass
    /// `username` to list another user's playlists.
    pub fn get_playlists(&self, username: Option<&str>) -> Result<Playlists> {
        let mut params = Vec::new();
        if let Some(username) = username {
            params.push(("username", username.to_owned()));
        }
        let response = self.get_req("getPlaylists", &params, "playlists")?;
        check(response)
    }

    /// Return a playlist with its songs.
    ///
    /// Endpoint: `getPlaylist`, payload key `playlist`.
    pub fn get_playlist(&self, id: &str) -> Result<PlaylistWithSongs> {
        let params = vec![("id", id.to_owned())];
        let response = self.get_req("getPlaylist", &params, "playlist")?;
        check(response)
    }

    /// Create a playlist, or overwrite an existing one.
    ///
    /// Endpoint: `createPlaylist`, payload key `playlist`. Pass `name` to
    /// create, or `playlist_id` to overwrite; one of the two is required by
    /// the server. `song_ids` become repeated `songId` parameters in order.
    pub fn create_playlist(
        &self,
        playlist_id: Option<&str>,
        name: Option<&str>,
        song_ids: &[&str],
    ) -> Result<PlaylistWithSongs> {
        let mut params = Vec::new();
        if let Some(id) = playlist_id {
            params.push(("playlistId", id.to_owned()));
        }
        if let Some(name) = name {
            params.push(("name", name.to_owned()));
        }
        for song_id in song_ids {
            params.push(("songId", (*song_id).to_owned()));
        }
        let response = self.get_req("createPlaylist", &params, "playlist")?;
        check(response)
    }

    /// Update a playlist's metadata and membership.
    ///
    /// Endpoint: `updatePlaylist`, a bare acknowledgement. `song_ids_to_add`
    /// become repeated `songIdToAdd` parameters; `song_indexes_to_remove`
    /// are zero-based positions in the current entry list, sent as repeated
    /// `songIndexToRemove` parameters.
    pub fn update_playlist(
        &self,
        playlist_id: &str,
        name: Option<&str>,
        comment: Option<&str>,
        public: Option<bool>,
        song_ids_to_add: &[&str],
        song_indexes_to_remove: &[u32],
    ) -> Result<()> {
        let mut params = vec![("playlistId", playlist_id.to_owned())];
        if let Some(name) = name {
            params.push(("name", name.to_owned()));
        }
        if let Some(comment) = comment {
            params.push(("comment", comment.to_owned()));
        }
        if let Some(public) = public {
            params.push(("isPublic", public.to_string()));
        }
        for song_id in song_ids_to_add {
            params.push(("songIdToAdd", (*song_id).to_owned()));
        }
        for index in song_indexes_to_remove {
            params.push(("songIndexToRemove", index.to_string()));
        }
        let response = self.get_req::<ApiError>("updatePlaylist", &params, "error")?;
        check(response).map(|_| ())
    }

    /// Delete a playlist.
    ///
    /// Endpoint: `deletePlaylist`, a bare acknowledgement.
    pub fn delete_playlist(&self, id: &str) -> Result<()> {
        let params = vec![("id", id.to_owned())];
        let response = self.get_req::<ApiError>("deletePlaylist", &params, "error")?;
        check(response).map(|_| ())
    }
}
