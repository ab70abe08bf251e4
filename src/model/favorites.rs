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

//! Favorite songs management.
//!
//! This module provides state for the user's favorites list, an
//! insertion-ordered set of songs unique by (title, artist).

use crate::model::SongRef;

#[derive(Debug, Default)]
pub struct Favorites {
    songs: Vec<SongRef>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a favorites list pre-populated with the given songs.
    pub fn seeded(songs: Vec<SongRef>) -> Self {
        Self { songs }
    }

    /// Adds a song to the favorites. Returns false without modifying the
    /// list when the song is already present.
    pub fn add(&mut self, song: SongRef) -> bool {
        if self.contains(&song.title, &song.artist) {
            return false;
        }
        self.songs.push(song);
        true
    }

    /// Removes a song from the favorites. Returns false when no matching
    /// song was present.
    pub fn remove(&mut self, title: &str, artist: &str) -> bool {
        let before = self.songs.len();
        self.songs.retain(|song| !song.matches(title, artist));
        self.songs.len() != before
    }

    pub fn contains(&self, title: &str, artist: &str) -> bool {
        self.songs.iter().any(|song| song.matches(title, artist))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SongRef> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: &str) -> SongRef {
        SongRef::new(title, artist, "")
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut favorites = Favorites::new();

        assert!(favorites.add(song("Imagine", "John Lennon")));
        assert!(!favorites.add(song("Imagine", "John Lennon")));

        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn remove_round_trips() {
        let mut favorites = Favorites::seeded(vec![song("Imagine", "John Lennon")]);

        assert!(favorites.remove("Imagine", "John Lennon"));
        assert!(favorites.is_empty());
        assert!(!favorites.remove("Imagine", "John Lennon"));
    }

    #[test]
    fn seeded_preserves_order() {
        let favorites = Favorites::seeded(vec![song("a", "x"), song("b", "y")]);

        let titles: Vec<&str> = favorites.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, vec!["a", "b"]);
    }
}
