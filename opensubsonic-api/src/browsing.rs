//! Browsing endpoints — the ID3-tag flavor of the API: `getGenres`,
//! `getArtists`, `getAlbum`, `getArtistInfo2`, `getAlbumInfo2`,
//! `getSimilarSongs2`, `getTopSongs`.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::{
    AlbumID3WithSongs, AlbumInfo, ArtistInfo2, ArtistsID3, Genres, SimilarSongs2, TopSongs,
};

impl SubsonicClient {
    /// Return all genres known to the server.
    ///
    /// Endpoint: `getGenres`, payload key `genres`.
    pub fn get_genres(&self) -> Result<Genres> {
        let response = self.get_req("getGenres", &[], "genres")?;
        check(response)
    }

    /// Return all artists, indexed alphabetically.
    ///
    /// Endpoint: `getArtists`, payload key `artists`.
    pub fn get_artists(&self) -> Result<ArtistsID3> {
        let response = self.get_req("getArtists", &[], "artists")?;
        check(response)
    }

    /// Return details for an album, including its songs.
    ///
    /// Endpoint: `getAlbum`, payload key `album`. An unknown `id` is
    /// answered with error code 70.
    pub fn get_album(&self, id: &str) -> Result<AlbumID3WithSongs> {
        let params = vec![("id", id.to_owned())];
        let response = self.get_req("getAlbum", &params, "album")?;
        check(response)
    }

    /// Return artist biography, image URLs, and similar artists.
    ///
    /// Endpoint: `getArtistInfo2`, payload key `artistInfo2`. `count` caps
    /// the number of similar artists; `include_not_present` also returns
    /// similar artists missing from the library. Omitted parameters fall
    /// back to the server defaults.
    pub fn get_artist_info2(
        &self,
        id: &str,
        count: Option<u32>,
        include_not_present: Option<bool>,
    ) -> Result<ArtistInfo2> {
        let mut params = vec![("id", id.to_owned())];
        if let Some(count) = count {
            params.push(("count", count.to_string()));
        }
        if let Some(include) = include_not_present {
            params.push(("includeNotPresent", include.to_string()));
        }
        let response = self.get_req("getArtistInfo2", &params, "artistInfo2")?;
        check(response)
    }

    /// Return album notes and image URLs.
    ///
    /// Endpoint: `getAlbumInfo2`, payload key `albumInfo`.
    pub fn get_album_info2(&self, id: &str) -> Result<AlbumInfo> {
        let params = vec![("id", id.to_owned())];
        let response = self.get_req("getAlbumInfo2", &params, "albumInfo")?;
        check(response)
    }

    /// Return songs similar to the given song, artist, or album.
    ///
    /// Endpoint: `getSimilarSongs2`, payload key `similarSongs2`.
    pub fn get_similar_songs2(&self, id: &str, count: Option<u32>) -> Result<SimilarSongs2> {
        let mut params = vec![("id", id.to_owned())];
        if let Some(count) = count {
            params.push(("count", count.to_string()));
        }
        let response = self.get_req("getSimilarSongs2", &params, "similarSongs2")?;
        check(response)
    }

    /// Return the top songs for the given artist name.
    ///
    /// Endpoint: `getTopSongs`, payload key `topSongs`.
    pub fn get_top_songs(&self, artist: &str, count: Option<u32>) -> Result<TopSongs> {
        let mut params = vec![("artist", artist.to_owned())];
        if let Some(count) = count {
            params.push(("count", count.to_string()));
        }
        let response = self.get_req("getTopSongs", &params, "topSongs")?;
        check(response)
    }
}
