//! Read-time composition of a parent record with its songs
//!
//! Both functions are pure: no I/O, output fully determined by input.

use crate::types::{Album, AlbumView, Playlist, PlaylistSongsView, Song, SongSummary};

/// Embed the album's songs, reduced to `{id, title, performer}`, keeping
/// their order. An empty song set yields an empty list.
pub fn aggregate_album(album: Album, songs: Vec<Song>) -> AlbumView {
    AlbumView {
        album,
        songs: songs.into_iter().map(SongSummary::from).collect(),
    }
}

/// Same shape for a playlist: its name, owner's username and songs
pub fn aggregate_playlist(playlist: Playlist, songs: Vec<Song>) -> PlaylistSongsView {
    PlaylistSongsView {
        id: playlist.id,
        name: playlist.name,
        username: playlist.username,
        songs: songs.into_iter().map(SongSummary::from).collect(),
    }
}
