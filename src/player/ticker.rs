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

//! Periodic playback tick scheduling.
//!
//! This module provides the one-second heartbeat that drives elapsed
//! playback time. A background thread sends [`AppEvent::Tick`] over the
//! application event channel; whoever owns the [`Ticker`] can stop it,
//! and dropping the handle stops it too, so no tick ever fires against a
//! torn-down player.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::events::AppEvent;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to the background tick thread.
pub(crate) struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick thread, sending a tick event once per second until
    /// stopped or until the receiving side goes away.
    pub(crate) fn start(event_tx: Sender<AppEvent>) -> Self {
        Self::spawn(event_tx, TICK_INTERVAL)
    }

    fn spawn(event_tx: Sender<AppEvent>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if thread_stop.load(Ordering::Relaxed) {
                    break;
                }
                if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stops the tick thread and waits for it to finish, so that no tick
    /// is delivered after this returns. Idempotent.
    pub(crate) fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
