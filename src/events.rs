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

//! Application event payloads.
//!
//! Events flow to the frontend through a single channel: the ticker
//! thread contributes [`AppEvent::Tick`], player operations contribute
//! user-facing [`Notification`]s, and auto-advance reports
//! [`AppEvent::TrackFinished`]. The frontend drains them via
//! [`crate::app::App::pump`] after each batch of input.

/// A user-facing toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// An event delivered to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One second of wall-clock time elapsed.
    Tick,

    /// The current track played to completion and the player advanced to
    /// the next one.
    TrackFinished,

    /// A toast to display.
    Notification(Notification),
}
