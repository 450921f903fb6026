//! Album/song list endpoints: `getAlbumList2`, `getRandomSongs`,
//! `getNowPlaying`.

use crate::client::{SubsonicClient, check};
use crate::error::Result;
use crate::types::{AlbumList2, NowPlaying, RandomSongs};

impl SubsonicClient {
    /// Return a list of albums: random, newest, highest rated, by year, by
    /// genre, ...
    ///
    /// Endpoint: `getAlbumList2`, payload key `albumList2`. `list_type` is
    /// one of the server's list types (`"random"`, `"newest"`, `"frequent"`,
    /// `"byYear"`, `"byGenre"`, ...). The year range and genre only have an
    /// effect for the matching list types but may always be supplied; an
    /// omitted parameter falls back to the server default.
    pub fn get_album_list2(
        &self,
        list_type: &str,
        size: Option<u32>,
        offset: Option<u32>,
        from_year: Option<u32>,
        to_year: Option<u32>,
        genre: Option<&str>,
    ) -> Result<AlbumList2> {
        let mut params = vec![("type", list_type.to_owned())];
        if let Some(size) = size {
            params.push(("size", size.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(year) = from_year {
            params.push(("fromYear", year.to_string()));
        }
        if let Some(year) = to_year {
            params.push(("toYear", year.to_string()));
        }
        if let Some(genre) = genre {
            params.push(("genre", genre.to_owned()));
        }
        let response = self.get_req("getAlbumList2", &params, "albumList2")?;
        check(response)
    }

    /// Return random songs matching the given criteria.
    ///
    /// Endpoint: `getRandomSongs`, payload key `randomSongs`.
    pub fn get_random_songs(
        &self,
        size: Option<u32>,
        genre: Option<&str>,
        from_year: Option<u32>,
        to_year: Option<u32>,
    ) -> Result<RandomSongs> {
        let mut params = Vec::new();
        if let Some(size) = size {
            params.push(("size", size.to_string()));
        }
        if let Some(genre) = genre {
            params.push(("genre", genre.to_owned()));
        }
        if let Some(year) = from_year {
            params.push(("fromYear", year.to_string()));
        }
        if let Some(year) = to_year {
            params.push(("toYear", year.to_string()));
        }
        let response = self.get_req("getRandomSongs", &params, "randomSongs")?;
        check(response)
    }

    /// Return what all users are currently playing.
    ///
    /// Endpoint: `getNowPlaying`, payload key `nowPlaying`.
    pub fn get_now_playing(&self) -> Result<NowPlaying> {
        let response = self.get_req("getNowPlaying", &[], "nowPlaying")?;
        check(response)
    }
}
