//! OpenSubsonic API client library.
//!
//! Typed, blocking access to an OpenSubsonic-compatible music server
//! (Navidrome, Gonic, Airsonic, ...): browsing, album/song lists, search,
//! playlists, and media annotation.
//!
//! # Authentication
//!
//! The password is never sent to the server. [`SubsonicClient::authenticate`]
//! derives a random salt and an MD5 token from it, then validates the pair
//! with a `ping` probe. It must be called once before any other endpoint;
//! until then the server answers every call with error code 40.
//!
//! ```no_run
//! use opensubsonic_api::SubsonicClient;
//!
//! let mut client =
//!     SubsonicClient::new("http://127.0.0.1:4533", "karl", "donitz", "my-player").unwrap();
//! client.authenticate().unwrap();
//!
//! let albums = client
//!     .get_album_list2("random", Some(10), None, None, None, None)
//!     .unwrap();
//! for album in &albums.album {
//!     println!("{} — {}", album.artist, album.name);
//! }
//! ```
//!
//! # API endpoint mapping
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | [`SubsonicClient::ping`] | `ping` | Connectivity test |
//! | [`SubsonicClient::get_license`] | `getLicense` | License details |
//! | [`SubsonicClient::get_genres`] | `getGenres` | All genres |
//! | [`SubsonicClient::get_artists`] | `getArtists` | Indexed artist list |
//! | [`SubsonicClient::get_album`] | `getAlbum` | Album with songs |
//! | [`SubsonicClient::get_artist_info2`] | `getArtistInfo2` | Artist biography |
//! | [`SubsonicClient::get_album_info2`] | `getAlbumInfo2` | Album notes |
//! | [`SubsonicClient::get_similar_songs2`] | `getSimilarSongs2` | Similar songs |
//! | [`SubsonicClient::get_top_songs`] | `getTopSongs` | Artist's top songs |
//! | [`SubsonicClient::get_album_list2`] | `getAlbumList2` | Album list page |
//! | [`SubsonicClient::get_random_songs`] | `getRandomSongs` | Random songs |
//! | [`SubsonicClient::get_now_playing`] | `getNowPlaying` | Active playback |
//! | [`SubsonicClient::search3`] | `search3` | Combined search |
//! | [`SubsonicClient::get_playlists`] | `getPlaylists` | All playlists |
//! | [`SubsonicClient::get_playlist`] | `getPlaylist` | Playlist with songs |
//! | [`SubsonicClient::create_playlist`] | `createPlaylist` | Create/overwrite |
//! | [`SubsonicClient::update_playlist`] | `updatePlaylist` | Edit metadata/songs |
//! | [`SubsonicClient::delete_playlist`] | `deletePlaylist` | Delete |
//! | [`SubsonicClient::star`] | `star` | Star media |
//! | [`SubsonicClient::unstar`] | `unstar` | Unstar media |
//! | [`SubsonicClient::set_rating`] | `setRating` | Rate media |
//! | [`SubsonicClient::scrobble`] | `scrobble` | Record playback |
//!
//! # Errors
//!
//! Every method returns [`error::Result`]. Transport failures carry the HTTP
//! status (0 when no response was obtained); server-side failures carry the
//! protocol's `{code, message}` error object verbatim. See
//! [`error::SubsonicError`].

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

mod annotation;
mod browsing;
mod lists;
mod playlist;
mod search;
mod system;

pub use client::SubsonicClient;
pub use error::{Result, SubsonicError};

/// Name of this library, sent as part of the user agent.
pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// OpenSubsonic API version implemented, sent as the `v` parameter.
pub const API_VERSION: &str = "1.16.1";
