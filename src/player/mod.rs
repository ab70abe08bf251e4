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

//! Playback transport state management.
//!
//! This module provides the transport state machine used by the UI to
//! control playback: the current track, the playing/paused flag, elapsed
//! time and volume. There is no audio engine behind it; elapsed time is
//! driven by the one-second ticker thread and the track catalog is
//! injected, read-only, at construction.
//!
//! Track index transitions are independent of the play/pause flag and
//! always reset elapsed time to zero.

pub(crate) mod ticker;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::PlayerError;
use crate::model::Track;
use crate::util::format;

const DEFAULT_VOLUME: u8 = 70;
const MAX_VOLUME: i32 = 100;

/// Represents the current transport status of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
}

/// Direction of a track skip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipDirection {
    Previous,
    Next,
}

/// Coarse volume bucket, used by the UI to pick the volume icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

/// The playback transport state machine.
pub struct PlaybackState {
    catalog: Arc<Catalog>,
    current_track: usize,
    state: PlayerState,
    elapsed_secs: u64,
    volume: u8,
}

impl PlaybackState {
    /// Creates a paused player positioned at the start of the first
    /// catalog track.
    ///
    /// # Panics
    ///
    /// Panics if the catalog contains no tracks.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        assert!(!catalog.is_empty(), "catalog must contain at least one track");

        Self {
            catalog,
            current_track: 0,
            state: PlayerState::Paused,
            elapsed_secs: 0,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_track
    }

    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.current_track]
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Flips between playing and paused, leaving every other field
    /// untouched. Returns the new "is playing" flag.
    pub fn toggle_play_pause(&mut self) -> bool {
        self.state = match self.state {
            PlayerState::Playing => PlayerState::Paused,
            PlayerState::Paused => PlayerState::Playing,
        };
        self.is_playing()
    }

    /// Steps to the adjacent track, wrapping at both ends of the catalog,
    /// and rewinds to the start of it.
    pub fn skip(&mut self, direction: SkipDirection) {
        let count = self.catalog.len();
        let delta = match direction {
            SkipDirection::Previous => count - 1,
            SkipDirection::Next => 1,
        };
        self.current_track = (self.current_track + delta) % count;
        self.elapsed_secs = 0;
    }

    /// Jumps directly to a catalog track and rewinds to the start of it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::IndexOutOfRange`] when the index is outside
    /// the catalog; the current position is left unchanged.
    pub fn jump_to_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.catalog.len() {
            return Err(PlayerError::IndexOutOfRange(index));
        }
        self.current_track = index;
        self.elapsed_secs = 0;
        Ok(())
    }

    /// Advances elapsed time by one second while playing.
    ///
    /// Returns true exactly when this advance reaches the end of the
    /// current track. The player never advances the track by itself; on a
    /// true return the caller skips to the next track.
    pub fn tick(&mut self) -> bool {
        if self.state != PlayerState::Playing {
            return false;
        }

        let duration = self.current_track().duration_secs;
        if self.elapsed_secs < duration {
            self.elapsed_secs += 1;
            return self.elapsed_secs == duration;
        }

        false
    }

    /// Sets the playback volume, clamped to `[0, 100]`.
    pub fn set_volume(&mut self, value: i32) {
        self.volume = value.clamp(0, MAX_VOLUME) as u8;
    }

    /// Adjusts the playback volume relative to the current level.
    ///
    /// # Arguments
    ///
    /// * `delta` - The amount to change the volume (positive or negative).
    pub fn adjust_volume(&mut self, delta: i32) {
        self.set_volume(self.volume as i32 + delta);
    }

    pub fn volume_level(&self) -> VolumeLevel {
        match self.volume {
            0 => VolumeLevel::Muted,
            1..=49 => VolumeLevel::Low,
            _ => VolumeLevel::High,
        }
    }

    /// Seeks within the current track to the given fraction of its
    /// duration. The fraction is clamped to `[0, 1]` and the resulting
    /// position rounded to whole seconds.
    pub fn set_progress_fraction(&mut self, fraction: f64) {
        let duration = self.current_track().duration_secs;
        let fraction = fraction.clamp(0.0, 1.0);
        self.elapsed_secs = ((fraction * duration as f64).round() as u64).min(duration);
    }

    /// Elapsed time as a fraction of the current track duration.
    pub fn progress(&self) -> f64 {
        let duration = self.current_track().duration_secs;
        self.elapsed_secs as f64 / duration as f64
    }

    /// The elapsed time as a `M:SS` display string.
    pub fn format_elapsed(&self) -> String {
        format::format_time(self.elapsed_secs)
    }

    /// The current track's duration as a `M:SS` display string.
    pub fn format_duration(&self) -> String {
        format::format_time(self.current_track().duration_secs)
    }
}
