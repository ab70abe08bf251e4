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

//! Media catalog management.
//!
//! The catalog is the read-only data source injected into the player:
//! playable tracks, playlist cards, the seed data for favorites and room
//! voting, and the pool behind the mocked song search. The core never
//! mutates it; [`Catalog::demo`] provides the static demo data set.

use crate::model::voting::VotingEntry;
use crate::model::{Playlist, SongRef, Track};
use crate::util::format::parse_duration;

pub struct Catalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    favorites_seed: Vec<SongRef>,
    voting_seed: Vec<VotingEntry>,
    search_pool: Vec<SongRef>,
}

impl Catalog {
    pub fn new(
        tracks: Vec<Track>,
        playlists: Vec<Playlist>,
        favorites_seed: Vec<SongRef>,
        voting_seed: Vec<VotingEntry>,
        search_pool: Vec<SongRef>,
    ) -> Self {
        Self {
            tracks,
            playlists,
            favorites_seed,
            voting_seed,
            search_pool,
        }
    }

    /// The built-in demo data set.
    pub fn demo() -> Self {
        let tracks = vec![
            Track {
                title: "Bohemian Rhapsody".to_string(),
                artist: "Queen".to_string(),
                album: "A Night at the Opera".to_string(),
                duration_secs: parse_duration("5:55"),
                cover_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop".to_string(),
            },
            Track {
                title: "Imagine".to_string(),
                artist: "John Lennon".to_string(),
                album: "Imagine".to_string(),
                duration_secs: parse_duration("3:03"),
                cover_url: "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=300&h=300&fit=crop".to_string(),
            },
            Track {
                title: "Stairway to Heaven".to_string(),
                artist: "Led Zeppelin".to_string(),
                album: "Led Zeppelin IV".to_string(),
                duration_secs: parse_duration("8:02"),
                cover_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=300&h=300&fit=crop".to_string(),
            },
            Track {
                title: "Hotel California".to_string(),
                artist: "Eagles".to_string(),
                album: "Hotel California".to_string(),
                duration_secs: parse_duration("6:30"),
                cover_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&h=300&fit=crop".to_string(),
            },
        ];

        let playlists = vec![
            Playlist {
                name: "Chill Vibes".to_string(),
                description: "Perfect for relaxing".to_string(),
                track_count: 24,
                cover_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=200&h=200&fit=crop".to_string(),
            },
            Playlist {
                name: "Workout Mix".to_string(),
                description: "High energy beats".to_string(),
                track_count: 32,
                cover_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=200&h=200&fit=crop".to_string(),
            },
            Playlist {
                name: "Focus Flow".to_string(),
                description: "Concentration music".to_string(),
                track_count: 18,
                cover_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=200&h=200&fit=crop".to_string(),
            },
            Playlist {
                name: "Late Night".to_string(),
                description: "Smooth jazz & soul".to_string(),
                track_count: 27,
                cover_url: "https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=200&h=200&fit=crop".to_string(),
            },
        ];

        let favorites_seed = vec![
            SongRef::new(
                "Imagine",
                "John Lennon",
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=60&h=60&fit=crop",
            ),
            SongRef::new(
                "Bohemian Rhapsody",
                "Queen",
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=60&h=60&fit=crop",
            ),
            SongRef::new(
                "Hotel California",
                "Eagles",
                "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=60&h=60&fit=crop",
            ),
        ];

        let voting_seed = vec![
            VotingEntry::new(
                SongRef::new(
                    "Imagine",
                    "John Lennon",
                    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=60&h=60&fit=crop",
                ),
                5,
                1,
            ),
            VotingEntry::new(
                SongRef::new(
                    "Stairway to Heaven",
                    "Led Zeppelin",
                    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=60&h=60&fit=crop",
                ),
                8,
                2,
            ),
        ];

        let search_pool = vec![
            SongRef::new(
                "Sweet Child O' Mine",
                "Guns N' Roses",
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=60&h=60&fit=crop",
            ),
            SongRef::new(
                "Thunderstruck",
                "AC/DC",
                "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=60&h=60&fit=crop",
            ),
        ];

        Self::new(tracks, playlists, favorites_seed, voting_seed, search_pool)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    pub fn favorites_seed(&self) -> &[SongRef] {
        &self.favorites_seed
    }

    /// The entries a freshly entered room's voting queue starts with.
    pub fn voting_seed(&self) -> Vec<VotingEntry> {
        self.voting_seed.clone()
    }

    /// Mocked song search: case-insensitive substring match on title or
    /// artist. A blank query yields no results.
    pub fn search(&self, query: &str) -> Vec<SongRef> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        self.search_pool
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&query)
                    || song.artist.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_the_expected_tracks() {
        let catalog = Catalog::demo();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.track(0).unwrap().title, "Bohemian Rhapsody");
        assert_eq!(catalog.track(0).unwrap().duration_secs, 355);
        assert_eq!(catalog.track(1).unwrap().duration_secs, 183);
        assert_eq!(catalog.track(2).unwrap().duration_secs, 482);
        assert_eq!(catalog.track(3).unwrap().duration_secs, 390);
        assert_eq!(catalog.playlists().len(), 4);
    }

    #[test]
    fn demo_seeds_are_present() {
        let catalog = Catalog::demo();

        assert_eq!(catalog.favorites_seed().len(), 3);

        let seed = catalog.voting_seed();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].score(), 4);
        assert_eq!(seed[1].score(), 6);
        assert!(seed.iter().all(|entry| entry.user_vote.is_none()));
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_artist() {
        let catalog = Catalog::demo();

        let by_title = catalog.search("thunder");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Thunderstruck");

        let by_artist = catalog.search("guns");
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].artist, "Guns N' Roses");
    }

    #[test]
    fn blank_search_yields_nothing() {
        let catalog = Catalog::demo();

        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn unmatched_search_yields_nothing() {
        let catalog = Catalog::demo();

        assert!(catalog.search("polka").is_empty());
    }
}
