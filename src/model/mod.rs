// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—songs,
//! tracks and playlists—used for catalog display, voting and playback.

pub mod favorites;
pub mod voting;

/// A lightweight reference to a song, as it appears in favorites, search
/// results and the voting queue.
///
/// Identity is the (title, artist) pair, compared case-sensitively; the
/// image URL is display data only and takes no part in identity.
#[derive(Debug, Clone)]
pub struct SongRef {
    pub title: String,
    pub artist: String,
    pub image_url: String,
}

impl SongRef {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            image_url: image_url.into(),
        }
    }

    /// Exact, case-sensitive identity match on (title, artist).
    pub fn matches(&self, title: &str, artist: &str) -> bool {
        self.title == title && self.artist == artist
    }
}

/// A playable catalog track.
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_secs: u64,
    pub cover_url: String,
}

/// A curated playlist card shown in the library view.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub name: String,
    pub description: String,
    pub track_count: u32,
    pub cover_url: String,
}
