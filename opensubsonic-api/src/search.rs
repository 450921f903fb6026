//! Search endpoint: `search3`.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::SearchResult3;

impl SubsonicClient {
    /// Search artists, albums, and songs in one call.
    ///
    /// Endpoint: `search3`, payload key `searchResult3`. The query is
    /// always sent; an empty query asks the server to return everything
    /// (useful for an initial library sync). The count/offset pairs page
    /// each of the three result lists independently; omitted values fall
    /// back to the server defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn search3(
        &self,
        query: &str,
        artist_count: Option<u32>,
        artist_offset: Option<u32>,
        album_count: Option<u32>,
        album_offset: Option<u32>,
        song_count: Option<u32>,
        song_offset: Option<u32>,
        music_folder_id: Option<&str>,
    ) -> Result<SearchResult3> {
        let mut params = vec![("query", query.to_owned())];
        if let Some(count) = artist_count {
            params.push(("artistCount", count.to_string()));
        }
        if let Some(offset) = artist_offset {
            params.push(("artistOffset", offset.to_string()));
        }
        if let Some(count) = album_count {
            params.push(("albumCount", count.to_string()));
        }
        if let Some(offset) = album_offset {
            params.push(("albumOffset", offset.to_string()));
        }
        if let Some(count) = song_count {
            params.push(("songCount", count.to_string()));
        }
        if let Some(offset) = song_offset {
            params.push(("songOffset", offset.to_string()));
        }
        if let Some(folder) = music_folder_id {
            params.push(("musicFolderId", folder.to_owned()));
        }
        let response = self.get_req("search3", &params, "searchResult3")?;
        check(response)
    }
}
