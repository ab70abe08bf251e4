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

//! # Music room player core.
//!
//! State and logic for a music player with mocked listening rooms:
//! playback transport, a per-room song voting queue, favorites, theming
//! and a static demo catalog. The crate renders nothing; a frontend
//! constructs an [`App`], relays user input to its operations, and reads
//! the state back out to draw.
//!
//! Rooms, members and votes are all local mock data. There is no audio
//! engine, no network protocol, and no persistence beyond the selected
//! theme key.
//!
//! ## Architecture
//!
//! The crate uses an event-driven architecture where:
//!
//! * The **frontend thread** owns the [`App`] and performs every state
//!   mutation synchronously, one operation at a time.
//! * A **ticker thread** provides the one-second heartbeat for elapsed
//!   playback time, communicating only through the event channel and
//!   stoppable by whoever owns the app.
//! * **[`App::pump`]** drains the channel, applying ticks (including
//!   end-of-track auto-advance) and handing notifications back to the
//!   frontend for display.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod player;
pub mod room;
pub mod theme;
mod util;
pub mod visualizer;

pub use app::App;
pub use catalog::Catalog;
pub use config::{ConfyStore, MemoryStore, PrefStore};
pub use error::PlayerError;
pub use events::{AppEvent, Notification};
pub use model::favorites::Favorites;
pub use model::voting::{VoteKind, VotingEntry, VotingQueue};
pub use model::{Playlist, SongRef, Track};
pub use player::{PlaybackState, PlayerState, SkipDirection, VolumeLevel};
pub use room::{Room, RoomOptions};
pub use theme::{Rgb, Theme, ThemeId};
pub use visualizer::{SPECTRUM_BANDS, Spectrum};
