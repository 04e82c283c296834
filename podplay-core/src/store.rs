//! Observable wrapper around [`PlayerState`].
//!
//! The store is owned by the UI root and handed by reference to whatever
//! needs to change the player. Views that only read register a
//! [`Subscription`] and receive a [`PlayerSnapshot`] after every operation
//! that changed the state.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::{
    commands::{PlayerCommand, PlayerSnapshot},
    episode::Episode,
    player::PlayerState,
};

/// Receiving end of a store subscription. Each view holds its own.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<PlayerSnapshot>,
}

impl Subscription {
    /// Next pending snapshot, if any
    pub fn try_recv(&self) -> Option<PlayerSnapshot> {
        self.rx.try_recv().ok()
    }

    /// Drain pending snapshots and keep only the newest one
    pub fn latest(&self) -> Option<PlayerSnapshot> {
        self.rx.try_iter().last()
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

/// What `dispatch` compares to decide whether to publish. The list is
/// identified by its buffer, so replacing it counts as a change even when the
/// new list holds the same episodes.
#[derive(Debug, PartialEq, Eq)]
struct Fingerprint {
    list: (*const Episode, usize),
    index: usize,
    playing: bool,
    looping: bool,
    shuffling: bool,
}

impl Fingerprint {
    fn of(state: &PlayerState) -> Self {
        let list = state.episode_list();
        Self {
            list: (list.as_ptr(), list.len()),
            index: state.current_episode_index(),
            playing: state.is_playing(),
            looping: state.is_looping(),
            shuffling: state.is_shuffling(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PlayerStore {
    state: PlayerState,
    subscribers: Vec<Sender<PlayerSnapshot>>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::from(&self.state)
    }

    /// Register a new subscriber. The current state is delivered first.
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = unbounded();
        // Receiver is alive, this cannot fail
        let _ = tx.send(self.snapshot());
        self.subscribers.push(tx);
        Subscription { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply a command and notify subscribers if anything changed
    pub fn dispatch(&mut self, command: PlayerCommand) {
        log::debug!("Player command: {}", command);
        let before = Fingerprint::of(&self.state);

        match command {
            PlayerCommand::Play(episode) => self.state.play(episode),
            PlayerCommand::PlayList { list, index } => self.state.play_list(list, index),
            PlayerCommand::Clear => self.state.clear_player_state(),
            PlayerCommand::Next => self.state.play_next(),
            PlayerCommand::Previous => self.state.play_previous(),
            PlayerCommand::TogglePlay => self.state.toggle_play(),
            PlayerCommand::ToggleLoop => self.state.toggle_loop(),
            PlayerCommand::ToggleShuffle => self.state.toggle_shuffling(),
            PlayerCommand::SetPlaying(playing) => self.state.set_playing_state(playing),
            PlayerCommand::EpisodeEnded => self.on_episode_ended(),
        }

        if Fingerprint::of(&self.state) != before {
            self.publish();
        }
    }

    pub fn play(&mut self, episode: Episode) {
        self.dispatch(PlayerCommand::Play(episode));
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.dispatch(PlayerCommand::PlayList { list, index });
    }

    pub fn clear_player_state(&mut self) {
        self.dispatch(PlayerCommand::Clear);
    }

    pub fn play_next(&mut self) {
        self.dispatch(PlayerCommand::Next);
    }

    pub fn play_previous(&mut self) {
        self.dispatch(PlayerCommand::Previous);
    }

    pub fn toggle_play(&mut self) {
        self.dispatch(PlayerCommand::TogglePlay);
    }

    pub fn toggle_loop(&mut self) {
        self.dispatch(PlayerCommand::ToggleLoop);
    }

    pub fn toggle_shuffling(&mut self) {
        self.dispatch(PlayerCommand::ToggleShuffle);
    }

    pub fn set_playing_state(&mut self, state: bool) {
        self.dispatch(PlayerCommand::SetPlaying(state));
    }

    /// React to the playback primitive finishing the current episode.
    ///
    /// Looping episodes are repeated by the primitive itself, so the store
    /// only moves on when not looping: to the next episode if there is one,
    /// otherwise the playlist is cleared and playback stops.
    pub fn handle_episode_ended(&mut self) {
        self.dispatch(PlayerCommand::EpisodeEnded);
    }

    fn on_episode_ended(&mut self) {
        if self.state.is_looping() {
            return;
        }
        if self.state.has_next() {
            self.state.play_next();
        } else {
            log::info!("Reached the end of the playlist");
            self.state.clear_player_state();
            self.state.set_playing_state(false);
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            log::debug!("Dropped {} closed player subscriptions", dropped);
        }
    }
}
