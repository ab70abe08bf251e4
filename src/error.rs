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

//! Player error conditions.
//!
//! Every failure surfaced by the core is one of these recoverable
//! conditions, returned to the caller for display. Operations never leave
//! partial state behind when they fail, and nothing here is fatal.

use thiserror::Error;

/// A recoverable failure from a player operation.
///
/// The display text is the user-facing message the frontend shows in its
/// notification toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// A voting mutation was attempted without an active room.
    #[error("You need to be in a room to vote for songs")]
    NoActiveRoom,

    /// The song is already present in the voting queue.
    #[error("This song is already in the voting queue")]
    DuplicateSong,

    /// No voting entry matches the given title and artist.
    #[error("This song is not in the voting queue")]
    SongNotFound,

    /// A track or playlist index was outside the catalog bounds.
    #[error("Index {0} is out of range")]
    IndexOutOfRange(usize),
}
