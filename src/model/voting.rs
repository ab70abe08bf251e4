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

//! Room voting queue management.
//!
//! This module provides state for the song voting queue of a listening
//! room: the list of proposed songs, their vote tallies, and the local
//! user's own vote on each. The queue itself emits no events; the frontend
//! re-reads [`VotingQueue::ranked`] after each mutation.

use crate::error::PlayerError;
use crate::model::SongRef;

/// Direction of a vote on a proposed song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Up,
    Down,
}

/// A song proposed for the room, with its aggregate tallies and the local
/// user's vote.
///
/// When `user_vote` is `Some`, the user's vote is included in exactly one
/// of the two counters; when `None`, in neither.
#[derive(Debug, Clone)]
pub struct VotingEntry {
    pub song: SongRef,
    pub up_votes: u32,
    pub down_votes: u32,
    pub user_vote: Option<VoteKind>,
}

impl VotingEntry {
    /// Creates an entry with the given tallies and no vote from the local
    /// user, as used for seeding a freshly entered room.
    pub fn new(song: SongRef, up_votes: u32, down_votes: u32) -> Self {
        Self {
            song,
            up_votes,
            down_votes,
            user_vote: None,
        }
    }

    /// Net score: up-votes minus down-votes. May be negative.
    pub fn score(&self) -> i64 {
        self.up_votes as i64 - self.down_votes as i64
    }
}

/// The mutable voting queue for the active room.
///
/// Entries are kept in insertion order and are unique by (title, artist).
/// All operations are synchronous and atomic: a failed operation leaves
/// the queue untouched.
#[derive(Debug, Default)]
pub struct VotingQueue {
    entries: Vec<VotingEntry>,
}

impl VotingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue pre-populated with the given entries, preserving
    /// their order.
    pub fn seeded(entries: Vec<VotingEntry>) -> Self {
        Self { entries }
    }

    /// Proposes a song for the room.
    ///
    /// Adding counts as an implicit up-vote by the proposer, so the new
    /// entry starts at one up-vote with `user_vote` set to [`VoteKind::Up`].
    ///
    /// # Errors
    ///
    /// * [`PlayerError::NoActiveRoom`] - `room_active` is false.
    /// * [`PlayerError::DuplicateSong`] - an entry with the same
    ///   (title, artist) already exists.
    pub fn add_song(&mut self, song: SongRef, room_active: bool) -> Result<(), PlayerError> {
        if !room_active {
            return Err(PlayerError::NoActiveRoom);
        }
        if self.contains(&song.title, &song.artist) {
            return Err(PlayerError::DuplicateSong);
        }

        self.entries.push(VotingEntry {
            song,
            up_votes: 1,
            down_votes: 0,
            user_vote: Some(VoteKind::Up),
        });

        Ok(())
    }

    /// Casts, switches or retracts the local user's vote on an entry.
    ///
    /// Voting the same direction twice retracts the vote; voting the other
    /// direction moves it. The stale vote is always removed from its
    /// counter before the new one is applied, so the entry invariant holds
    /// throughout.
    ///
    /// # Errors
    ///
    /// * [`PlayerError::NoActiveRoom`] - `room_active` is false.
    /// * [`PlayerError::SongNotFound`] - no entry matches (title, artist).
    pub fn cast_vote(
        &mut self,
        title: &str,
        artist: &str,
        vote: VoteKind,
        room_active: bool,
    ) -> Result<(), PlayerError> {
        if !room_active {
            return Err(PlayerError::NoActiveRoom);
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.song.matches(title, artist))
            .ok_or(PlayerError::SongNotFound)?;

        // Remove the previous vote, if any. Counters saturate at zero,
        // which is unreachable while the entry invariant holds.
        match entry.user_vote {
            Some(VoteKind::Up) => entry.up_votes = entry.up_votes.saturating_sub(1),
            Some(VoteKind::Down) => entry.down_votes = entry.down_votes.saturating_sub(1),
            None => {}
        }

        if entry.user_vote == Some(vote) {
            // Same direction as before: retraction.
            entry.user_vote = None;
        } else {
            match vote {
                VoteKind::Up => entry.up_votes += 1,
                VoteKind::Down => entry.down_votes += 1,
            }
            entry.user_vote = Some(vote);
        }

        Ok(())
    }

    /// Returns a restartable ranked view of the queue: descending by
    /// score, with ties in insertion order. The queue is not modified.
    pub fn ranked(&self) -> impl Iterator<Item = &VotingEntry> {
        let mut view: Vec<&VotingEntry> = self.entries.iter().collect();
        view.sort_by_key(|entry| std::cmp::Reverse(entry.score()));
        view.into_iter()
    }

    /// Empties the queue. Used when leaving a room.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, title: &str, artist: &str) -> bool {
        self.get(title, artist).is_some()
    }

    pub fn get(&self, title: &str, artist: &str) -> Option<&VotingEntry> {
        self.entries.iter().find(|entry| entry.song.matches(title, artist))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
