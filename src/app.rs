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

//! Application state and operation orchestration.
//!
//! [`App`] is the explicitly owned player instance a frontend constructs
//! and drives; there is no ambient global. It composes the transport
//! state, the room voting queue, favorites and theming around an injected
//! read-only catalog, and pushes user-facing feedback through a single
//! event channel.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Input**: The frontend relays user actions by calling the
//!    operations below on its own thread; each call either succeeds with
//!    a defined state change or fails with one [`PlayerError`].
//! 2. **Time**: A background ticker thread sends one [`AppEvent::Tick`]
//!    per second over the event channel.
//! 3. **Pump**: The frontend calls [`App::pump`] to drain the channel;
//!    ticks advance elapsed time and trigger auto-advance at the end of a
//!    track, and the drained events tell the frontend what to re-render.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};

use crate::{
    catalog::Catalog,
    config::{self, PrefStore},
    error::PlayerError,
    events::{AppEvent, Notification},
    model::{
        SongRef,
        favorites::Favorites,
        voting::{VoteKind, VotingQueue},
    },
    player::{PlaybackState, SkipDirection, ticker::Ticker},
    room::{Room, RoomOptions},
    theme::{Theme, ThemeId},
};

/// Application state.
pub struct App {
    prefs: Box<dyn PrefStore>,
    theme: Theme,

    catalog: Arc<Catalog>,
    playback: PlaybackState,

    voting: VotingQueue,
    favorites: Favorites,
    current_room: Option<Room>,

    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,

    ticker: Option<Ticker>,
}

impl App {
    /// Creates a new instance of application state around the given
    /// catalog, restoring the persisted theme from the preference store.
    pub fn new(catalog: Arc<Catalog>, prefs: Box<dyn PrefStore>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let theme_id = prefs
            .get(config::THEME_KEY)
            .and_then(|key| ThemeId::from_key(&key))
            .unwrap_or_default();

        let playback = PlaybackState::new(Arc::clone(&catalog));
        let favorites = Favorites::seeded(catalog.favorites_seed().to_vec());

        Self {
            prefs,
            theme: theme_id.palette(),
            catalog,
            playback,
            voting: VotingQueue::new(),
            favorites,
            current_room: None,
            event_tx,
            event_rx,
            ticker: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn voting(&self) -> &VotingQueue {
        &self.voting
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // ---- Events ----

    /// Starts the one-second tick thread. Does nothing when it is already
    /// running.
    pub fn start_ticker(&mut self) {
        if self.ticker.is_none() {
            self.ticker = Some(Ticker::start(self.event_tx.clone()));
        }
    }

    /// Stops the tick thread, guaranteeing no further tick is processed.
    /// Dropping the app stops it too.
    pub fn shutdown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Drains and applies all pending events, returning them in order for
    /// the frontend to render.
    ///
    /// A tick advances elapsed playback time; when that completes the
    /// current track the player auto-advances to the next one, which
    /// appends the resulting notification and [`AppEvent::TrackFinished`]
    /// behind the tick in the returned batch.
    pub fn pump(&mut self) -> Vec<AppEvent> {
        let mut processed = Vec::new();

        while let Ok(event) = self.event_rx.try_recv() {
            if matches!(event, AppEvent::Tick) {
                self.apply_tick();
            }
            processed.push(event);
        }

        processed
    }

    fn apply_tick(&mut self) {
        if self.playback.tick() {
            self.next_track();
            self.emit(AppEvent::TrackFinished);
        }
    }

    fn emit(&self, event: AppEvent) {
        self.event_tx.send(event).ok();
    }

    fn notify(&self, title: &str, message: impl Into<String>) {
        self.emit(AppEvent::Notification(Notification::new(title, message)));
    }

    fn notify_error(&self, error: PlayerError) {
        let title = match error {
            PlayerError::DuplicateSong => "Already Added",
            _ => "Error",
        };
        self.notify(title, error.to_string());
    }

    // ---- Rooms ----

    fn room_active(&self) -> bool {
        self.current_room.is_some()
    }

    /// Creates and enters a room hosted by the local user.
    ///
    /// A blank room name is rejected with an error notification and no
    /// state change.
    pub fn create_room(&mut self, options: RoomOptions) -> Option<&Room> {
        if options.name.trim().is_empty() {
            self.notify("Error", "Please enter a room name");
            return None;
        }

        let room = Room::host(options);
        let announcement = format!("Room \"{}\" created! Room ID: {}", room.name, room.id);
        self.enter_room(room);
        self.notify("Room Created", announcement);

        self.current_room.as_ref()
    }

    /// Joins an existing room by id.
    ///
    /// A blank id is rejected with an error notification and no state
    /// change.
    pub fn join_room(&mut self, id: &str) -> Option<&Room> {
        let id = id.trim();
        if id.is_empty() {
            self.notify("Error", "Please enter a room ID");
            return None;
        }

        self.enter_room(Room::join(id));
        self.notify("Joined Room", format!("Successfully joined room: {}", id));

        self.current_room.as_ref()
    }

    fn enter_room(&mut self, room: Room) {
        self.voting = VotingQueue::seeded(self.catalog.voting_seed());
        self.current_room = Some(room);
    }

    /// Leaves the current room, discarding its voting queue. Does nothing
    /// when no room is active.
    pub fn leave_room(&mut self) {
        if let Some(room) = self.current_room.take() {
            self.voting.clear();
            self.notify("Left Room", format!("You left \"{}\"", room.name));
        }
    }

    // ---- Voting ----

    /// Proposes a song for the room's voting queue.
    pub fn add_song_to_voting(&mut self, song: SongRef) -> Result<(), PlayerError> {
        let title = song.title.clone();
        match self.voting.add_song(song, self.room_active()) {
            Ok(()) => {
                self.notify("Added to Voting", format!("\"{}\" added to voting queue", title));
                Ok(())
            }
            Err(error) => {
                self.notify_error(error);
                Err(error)
            }
        }
    }

    /// Proposes the currently playing track for the voting queue.
    pub fn add_current_to_voting(&mut self) -> Result<(), PlayerError> {
        let song = self.current_song();
        self.add_song_to_voting(song)
    }

    /// Casts, switches or retracts the local user's vote on a queued song.
    pub fn vote(
        &mut self,
        title: &str,
        artist: &str,
        vote: VoteKind,
    ) -> Result<(), PlayerError> {
        match self.voting.cast_vote(title, artist, vote, self.room_active()) {
            Ok(()) => {
                self.notify("Vote Updated", format!("Your vote for \"{}\" has been updated", title));
                Ok(())
            }
            Err(error) => {
                self.notify_error(error);
                Err(error)
            }
        }
    }

    // ---- Favorites ----

    /// Adds a song to the favorites list. Returns false when it was
    /// already a favorite.
    pub fn add_to_favorites(&mut self, song: SongRef) -> bool {
        let title = song.title.clone();
        if self.favorites.add(song) {
            self.notify("Added to Favorites", format!("\"{}\" added to your favorites", title));
            true
        } else {
            self.notify("Already Favorited", "This song is already in your favorites");
            false
        }
    }

    /// Adds the currently playing track to the favorites list.
    pub fn add_current_to_favorites(&mut self) -> bool {
        let song = self.current_song();
        self.add_to_favorites(song)
    }

    /// Toggles the currently playing track in and out of the favorites
    /// list (the player's heart button).
    pub fn toggle_like(&mut self) {
        let song = self.current_song();
        if self.favorites.contains(&song.title, &song.artist) {
            self.favorites.remove(&song.title, &song.artist);
            self.notify("Removed from Favorites", "Track removed from your favorites");
        } else {
            self.favorites.add(song);
            self.notify("Added to Favorites", "Track added to your favorites");
        }
    }

    fn current_song(&self) -> SongRef {
        let track = self.playback.current_track();
        SongRef::new(
            track.title.clone(),
            track.artist.clone(),
            track.cover_url.clone(),
        )
    }

    // ---- Transport ----

    /// Toggles the playback state between paused and playing. Returns the
    /// new "is playing" flag.
    pub fn toggle_play_pause(&mut self) -> bool {
        let playing = self.playback.toggle_play_pause();
        if playing {
            let track = self.playback.current_track();
            self.notify("Now Playing", format!("{} by {}", track.title, track.artist));
        } else {
            self.notify("Paused", "Music paused");
        }
        playing
    }

    /// Skips to the next track, wrapping at the end of the catalog.
    pub fn next_track(&mut self) {
        self.playback.skip(SkipDirection::Next);
        let title = self.playback.current_track().title.clone();
        self.notify("Next Track", title);
    }

    /// Skips to the previous track, wrapping at the start of the catalog.
    pub fn previous_track(&mut self) {
        self.playback.skip(SkipDirection::Previous);
        let title = self.playback.current_track().title.clone();
        self.notify("Previous Track", title);
    }

    /// Jumps to a catalog track and makes sure playback is running (the
    /// track list's double-click-to-play).
    pub fn play_track_at(&mut self, index: usize) -> Result<(), PlayerError> {
        if let Err(error) = self.playback.jump_to_track(index) {
            self.notify_error(error);
            return Err(error);
        }

        if !self.playback.is_playing() {
            self.playback.toggle_play_pause();
        }

        let track = self.playback.current_track();
        self.notify("Now Playing", format!("{} by {}", track.title, track.artist));
        Ok(())
    }

    /// Announces a playlist and makes sure playback is running. Playlist
    /// contents are display data only; the transport keeps its catalog
    /// position.
    pub fn play_playlist(&mut self, index: usize) -> Result<(), PlayerError> {
        let Some(playlist) = self.catalog.playlist(index) else {
            let error = PlayerError::IndexOutOfRange(index);
            self.notify_error(error);
            return Err(error);
        };

        let name = playlist.name.clone();
        self.notify("Playing Playlist", format!("Started playing \"{}\"", name));

        if !self.playback.is_playing() {
            self.playback.toggle_play_pause();
        }
        Ok(())
    }

    pub fn set_volume(&mut self, value: i32) {
        self.playback.set_volume(value);
    }

    pub fn adjust_volume(&mut self, delta: i32) {
        self.playback.adjust_volume(delta);
    }

    /// Seeks within the current track to a fraction of its duration.
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        self.playback.set_progress_fraction(fraction);
    }

    // ---- Search ----

    /// Searches the catalog's song pool for the add-song dialog.
    pub fn search(&self, query: &str) -> Vec<SongRef> {
        self.catalog.search(query)
    }

    // ---- Theme ----

    /// Applies a palette and persists its key as the selected theme.
    pub fn set_theme(&mut self, id: ThemeId) {
        self.theme = id.palette();
        self.prefs.set(config::THEME_KEY, id.key());
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    /// Preference store whose backing map outlives the app, so tests can
    /// observe what was persisted.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

    impl PrefStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    fn app() -> App {
        App::new(Arc::new(Catalog::demo()), Box::new(MemoryStore::new()))
    }

    fn notifications(events: &[AppEvent]) -> Vec<&Notification> {
        events
            .iter()
            .filter_map(|event| match event {
                AppEvent::Notification(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn restores_the_persisted_theme() {
        let mut store = MemoryStore::new();
        store.set(config::THEME_KEY, "purple");

        let app = App::new(Arc::new(Catalog::demo()), Box::new(store));

        assert_eq!(app.theme().name, "Purple Rain");
    }

    #[test]
    fn unknown_persisted_theme_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(config::THEME_KEY, "neon");

        let app = App::new(Arc::new(Catalog::demo()), Box::new(store));

        assert_eq!(app.theme().name, "Default");
    }

    #[test]
    fn set_theme_persists_the_key() {
        let store = SharedStore::default();
        let mut app = App::new(Arc::new(Catalog::demo()), Box::new(store.clone()));

        app.set_theme(ThemeId::ForestGreen);

        assert_eq!(app.theme().name, "Forest Green");
        assert_eq!(store.get(config::THEME_KEY).as_deref(), Some("green"));
    }

    #[test]
    fn blank_room_name_is_rejected() {
        let mut app = app();

        assert!(app.create_room(RoomOptions::named("   ")).is_none());

        assert!(app.current_room().is_none());
        let events = app.pump();
        let toasts = notifications(&events);
        assert_eq!(toasts[0].title, "Error");
        assert_eq!(toasts[0].message, "Please enter a room name");
    }

    #[test]
    fn hosting_a_room_seeds_the_voting_queue() {
        let mut app = app();

        app.create_room(RoomOptions::named("Friday Jams"));

        let room = app.current_room().unwrap();
        assert!(room.is_host);
        assert_eq!(room.members, 1);

        assert_eq!(app.voting().len(), 2);
        let first = app.voting().ranked().next().unwrap();
        assert_eq!(first.song.title, "Stairway to Heaven");
    }

    #[test]
    fn blank_room_id_is_rejected() {
        let mut app = app();

        assert!(app.join_room("  ").is_none());

        assert!(app.current_room().is_none());
    }

    #[test]
    fn leaving_a_room_discards_the_voting_queue() {
        let mut app = app();
        app.join_room("AB12CD");
        assert!(!app.voting().is_empty());

        app.leave_room();

        assert!(app.current_room().is_none());
        assert!(app.voting().is_empty());
        assert_eq!(
            app.add_current_to_voting(),
            Err(PlayerError::NoActiveRoom)
        );
    }

    #[test]
    fn voting_flow_for_the_current_track() {
        let mut app = app();
        app.join_room("AB12CD");

        // Current track is Bohemian Rhapsody; adding is an implicit up-vote.
        app.add_current_to_voting().unwrap();
        let entry = app.voting().get("Bohemian Rhapsody", "Queen").unwrap();
        assert_eq!((entry.up_votes, entry.down_votes), (1, 0));
        assert_eq!(entry.user_vote, Some(VoteKind::Up));

        assert_eq!(app.add_current_to_voting(), Err(PlayerError::DuplicateSong));

        app.vote("Bohemian Rhapsody", "Queen", VoteKind::Down).unwrap();
        let entry = app.voting().get("Bohemian Rhapsody", "Queen").unwrap();
        assert_eq!((entry.up_votes, entry.down_votes), (0, 1));
        assert_eq!(entry.user_vote, Some(VoteKind::Down));
    }

    #[test]
    fn duplicate_add_surfaces_the_original_toast() {
        let mut app = app();
        app.join_room("AB12CD");
        app.add_current_to_voting().unwrap();
        app.pump();

        let _ = app.add_current_to_voting();

        let events = app.pump();
        let toasts = notifications(&events);
        assert_eq!(toasts[0].title, "Already Added");
        assert_eq!(toasts[0].message, "This song is already in the voting queue");
    }

    #[test]
    fn toggle_like_round_trips_the_current_track() {
        let mut app = app();

        // Bohemian Rhapsody is in the seeded favorites.
        app.toggle_like();
        assert!(!app.favorites().contains("Bohemian Rhapsody", "Queen"));

        app.toggle_like();
        assert!(app.favorites().contains("Bohemian Rhapsody", "Queen"));
    }

    #[test]
    fn play_pause_notifies_with_track_details() {
        let mut app = app();

        app.toggle_play_pause();
        app.toggle_play_pause();

        let events = app.pump();
        let toasts = notifications(&events);
        assert_eq!(toasts[0].title, "Now Playing");
        assert_eq!(toasts[0].message, "Bohemian Rhapsody by Queen");
        assert_eq!(toasts[1].title, "Paused");
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let mut app = app();

        app.event_tx.send(AppEvent::Tick).unwrap();
        let events = app.pump();

        assert_eq!(events, vec![AppEvent::Tick]);
        assert_eq!(app.playback().elapsed_secs(), 0);
    }

    #[test]
    fn finishing_a_track_auto_advances() {
        let mut app = app();
        app.play_track_at(1).unwrap(); // Imagine, 3:03
        app.seek_to_fraction(182.0 / 183.0);
        app.pump();

        app.event_tx.send(AppEvent::Tick).unwrap();
        let events = app.pump();

        assert_eq!(app.playback().current_index(), 2);
        assert_eq!(app.playback().elapsed_secs(), 0);
        assert!(app.playback().is_playing());

        assert_eq!(events[0], AppEvent::Tick);
        assert!(events.contains(&AppEvent::TrackFinished));
        let toasts = notifications(&events);
        assert_eq!(toasts[0].title, "Next Track");
        assert_eq!(toasts[0].message, "Stairway to Heaven");
    }

    #[test]
    fn play_track_at_rejects_bad_indices() {
        let mut app = app();

        assert_eq!(
            app.play_track_at(9),
            Err(PlayerError::IndexOutOfRange(9))
        );
        assert!(!app.playback().is_playing());
    }

    #[test]
    fn play_playlist_starts_playback() {
        let mut app = app();

        app.play_playlist(0).unwrap();

        assert!(app.playback().is_playing());
        assert_eq!(
            app.play_playlist(7),
            Err(PlayerError::IndexOutOfRange(7))
        );
    }
}
