//! Data types for OpenSubsonic API responses.
//!
//! Every endpoint answers with the same outer envelope,
//! [`SubsonicResponse`], wrapped in a top-level `"subsonic-response"` JSON
//! key. The endpoint-specific payload sits inside the envelope under a
//! per-endpoint key (`"album"`, `"playlists"`, `"searchResult3"`, ...).
//!
//! Field names on the wire are camelCase; the structs below use
//! `#[serde(rename_all = "camelCase")]` and Rust `snake_case` fields.
//!
//! Optional fields decode to their zero value when the server omits them:
//! `""` for strings, `0` for numbers, `false` for booleans, empty `Vec` for
//! lists. A record never fails to decode because an optional field is
//! absent. Required fields (e.g. `id` and `name` on artists and albums) are
//! present in every valid server response, and their absence is a decode
//! error.
//!
//! Records that extend another record on the wire (an album with its songs,
//! a now-playing entry with listener metadata) embed the base record by
//! value with `#[serde(flatten)]`: both are decoded from the same flat JSON
//! object.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The response envelope shared by every endpoint.
///
/// Wire shape:
///
/// ```json
/// {
///   "subsonic-response": {
///     "status": "ok",
///     "version": "1.16.1",
///     "type": "navidrome",
///     "serverVersion": "0.54.0",
///     "openSubsonic": true,
///     "error": { "code": 40, "message": "Wrong username or password" },
///     "<payload key>": { ... }
///   }
/// }
/// ```
///
/// `status` is the authoritative success discriminant (`"ok"` vs anything
/// else, typically `"failed"`). `error` is populated only on failure.
/// `data` holds the endpoint payload; it is attached by the client after
/// envelope decoding and is `None` for bare acknowledgements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = ""))]
pub struct SubsonicResponse<T> {
    /// `"ok"` on success, `"failed"` otherwise.
    pub status: String,
    /// Protocol version the server implements.
    pub version: String,
    /// Server software name, e.g. `"navidrome"`.
    #[serde(rename = "type")]
    pub server_type: String,
    /// Server software version.
    pub server_version: String,
    /// Whether the server supports the OpenSubsonic extensions.
    pub open_subsonic: bool,
    /// Error detail, present only when `status` is not `"ok"`.
    #[serde(default)]
    pub error: Option<ApiError>,
    /// Endpoint payload, extracted by its payload key.
    #[serde(skip)]
    pub data: Option<T>,
}

/// Error object embedded in a failed envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Server-defined error code; the code space is open-ended.
    #[serde(default)]
    pub code: u32,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

/// Software license details (`getLicense`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Whether the license is valid. Always present.
    pub valid: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub license_expires: String,
    #[serde(default)]
    pub trial_expires: String,
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

/// An artist from ID3 tags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistID3 {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cover_art: String,
    #[serde(default)]
    pub artist_image_url: String,
    #[serde(default)]
    pub album_count: u32,
    #[serde(default)]
    pub user_rating: u32,
    /// Date the artist was starred, empty if not starred.
    #[serde(default)]
    pub starred: String,
    #[serde(default)]
    pub music_brainz_id: String,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// One index bucket (usually a letter) of the artist list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexID3 {
    pub name: String,
    #[serde(default)]
    pub artist: Vec<ArtistID3>,
}

/// The indexed artist list (`getArtists`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistsID3 {
    /// Articles the server ignores when sorting, e.g. `"The El La"`.
    pub ignored_articles: String,
    #[serde(default)]
    pub index: Vec<IndexID3>,
}

/// Artist biography and related artists (`getArtistInfo2`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfo2 {
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub music_brainz_id: String,
    #[serde(default)]
    pub last_fm_url: String,
    #[serde(default)]
    pub small_image_url: String,
    #[serde(default)]
    pub medium_image_url: String,
    #[serde(default)]
    pub large_image_url: String,
    #[serde(default)]
    pub similar_artist: Vec<ArtistID3>,
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

/// An album from ID3 tags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumID3 {
    pub id: String,
    pub name: String,
    /// Display name of the album artist.
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub cover_art: String,
    #[serde(default)]
    pub song_count: u32,
    /// Total duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub created: String,
    /// Date the album was starred, empty if not starred.
    #[serde(default)]
    pub starred: String,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub played: String,
    #[serde(default)]
    pub user_rating: u32,
    #[serde(default)]
    pub record_labels: Vec<RecordLabel>,
    #[serde(default)]
    pub music_brainz_id: String,
    #[serde(default)]
    pub genres: Vec<ItemGenre>,
    #[serde(default)]
    pub artists: Vec<ArtistID3>,
    #[serde(default)]
    pub display_artist: String,
    #[serde(default)]
    pub release_types: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub original_release_date: ItemDate,
    #[serde(default)]
    pub release_date: ItemDate,
    #[serde(default)]
    pub is_compilation: bool,
    #[serde(default)]
    pub disc_titles: Vec<DiscTitle>,
}

/// An album plus its song list (`getAlbum`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumID3WithSongs {
    #[serde(flatten)]
    pub album: AlbumID3,
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Album notes and image URLs (`getAlbumInfo2`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub music_brainz_id: String,
    #[serde(default)]
    pub last_fm_url: String,
    #[serde(default)]
    pub small_image_url: String,
    #[serde(default)]
    pub medium_image_url: String,
    #[serde(default)]
    pub large_image_url: String,
}

/// Album list page (`getAlbumList2`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumList2 {
    #[serde(default)]
    pub album: Vec<AlbumID3>,
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// A media entry — in practice a song, the protocol also uses it for
/// directories and videos. The richest record in the schema; almost every
/// field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    #[serde(default)]
    pub parent: String,
    pub is_dir: bool,
    pub title: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub track: u32,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub cover_art: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub transcoded_content_type: String,
    #[serde(default)]
    pub transcoded_suffix: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub bit_rate: u32,
    #[serde(default)]
    pub bit_depth: u32,
    #[serde(default)]
    pub sampling_rate: u32,
    #[serde(default)]
    pub channel_count: u32,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub user_rating: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub disc_number: u32,
    #[serde(default)]
    pub created: String,
    /// Date the song was starred, empty if not starred.
    #[serde(default)]
    pub starred: String,
    #[serde(default)]
    pub album_id: String,
    #[serde(default)]
    pub artist_id: String,
    /// Media category, e.g. `"music"` or `"podcast"`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub bookmark_position: u64,
    #[serde(default)]
    pub original_width: u32,
    #[serde(default)]
    pub original_height: u32,
    #[serde(default)]
    pub played: String,
    #[serde(default)]
    pub bpm: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub music_brainz_id: String,
    #[serde(default)]
    pub genres: Vec<ItemGenre>,
    #[serde(default)]
    pub artists: Vec<ArtistID3>,
    #[serde(default)]
    pub display_artist: String,
    #[serde(default)]
    pub album_artists: Vec<ArtistID3>,
    #[serde(default)]
    pub display_album_artist: String,
    #[serde(default)]
    pub replay_gain: ReplayGain,
}

/// A song currently being played, with listener metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingEntry {
    #[serde(flatten)]
    pub song: Child,
    /// The user listening to this song.
    pub username: String,
    #[serde(default)]
    pub minutes_ago: u32,
    #[serde(default)]
    pub player_id: u32,
    #[serde(default)]
    pub player_name: String,
}

/// Entries for everything currently playing (`getNowPlaying`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    #[serde(default)]
    pub entry: Vec<NowPlayingEntry>,
}

/// Random song selection (`getRandomSongs`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomSongs {
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Songs similar to a given one (`getSimilarSongs2`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarSongs2 {
    #[serde(default)]
    pub song: Vec<Child>,
}

/// Top songs of an artist (`getTopSongs`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSongs {
    #[serde(default)]
    pub song: Vec<Child>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Combined artist/album/song search result (`search3`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult3 {
    #[serde(default)]
    pub artist: Vec<ArtistID3>,
    #[serde(default)]
    pub album: Vec<AlbumID3>,
    #[serde(default)]
    pub song: Vec<Child>,
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

/// A playlist without its entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub song_count: u32,
    /// Total duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub changed: String,
    #[serde(default)]
    pub cover_art: String,
    #[serde(default)]
    pub allowed_user: Vec<String>,
}

/// A playlist plus its songs (`getPlaylist`, `createPlaylist`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistWithSongs {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub entry: Vec<Child>,
}

/// All playlists visible to the user (`getPlaylists`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlists {
    #[serde(default)]
    pub playlist: Vec<Playlist>,
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// A genre with usage counts (`getGenres`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub value: String,
    #[serde(default)]
    pub song_count: u32,
    #[serde(default)]
    pub album_count: u32,
}

/// Genre list (`getGenres`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genres {
    #[serde(default)]
    pub genre: Vec<Genre>,
}

/// A record label name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLabel {
    #[serde(default)]
    pub name: String,
}

/// A genre name attached to an item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGenre {
    #[serde(default)]
    pub name: String,
}

/// A partial release date; unknown parts are zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDate {
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub day: u32,
}

/// A disc title inside a multi-disc album.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscTitle {
    #[serde(default)]
    pub disc: u32,
    #[serde(default)]
    pub title: String,
}

/// Replay-gain values of a media entry, in dB.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayGain {
    #[serde(default)]
    pub track_gain: f64,
    #[serde(default)]
    pub album_gain: f64,
    #[serde(default)]
    pub track_peak: f64,
    #[serde(default)]
    pub album_peak: f64,
    #[serde(default)]
    pub base_gain: f64,
    #[serde(default)]
    pub fallback_gain: f64,
}
