//! Simulated playback primitive.
//!
//! Episodes are remote URLs and decoding them is not part of this player, so
//! the transport only keeps a clock for the current episode. It follows the
//! store through its own subscription and reports back the events a real
//! audio element would: reaching the end, or being unable to play.

use std::time::Duration;

use podplay_core::{Episode, PlayerSnapshot, PlayerStore, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// The current episode played to its end
    Ended,
    /// Playback was requested but nothing is loaded
    Stopped,
}

#[derive(Debug)]
pub struct Transport {
    subscription: Subscription,
    loaded: Option<(usize, Episode)>,
    /// Position in seconds
    position: f64,
    requested: bool,
    looping: bool,
}

impl Transport {
    pub fn new(store: &mut PlayerStore) -> Self {
        let mut transport = Self {
            subscription: store.subscribe(),
            loaded: None,
            position: 0.0,
            requested: false,
            looping: false,
        };
        transport.sync();
        transport
    }

    /// Pick up the latest state published by the store
    pub fn sync(&mut self) {
        if let Some(snapshot) = self.subscription.latest() {
            self.apply(&snapshot);
        }
    }

    fn apply(&mut self, snapshot: &PlayerSnapshot) {
        let current = snapshot
            .current_episode()
            .map(|episode| (snapshot.current_episode_index, episode.clone()));

        if current != self.loaded {
            match &current {
                Some((_, episode)) => log::info!("Loading {} ({})", episode.title, episode.url),
                None => log::debug!("Transport unloaded"),
            }
            self.loaded = current;
            self.position = 0.0;
        }

        self.requested = snapshot.is_playing;
        self.looping = snapshot.is_looping;
    }

    /// Advance the clock by `elapsed` if playing.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TransportEvent> {
        if !self.requested {
            return None;
        }
        let Some((_, episode)) = &self.loaded else {
            return Some(TransportEvent::Stopped);
        };

        self.position += elapsed.as_secs_f64();
        if self.position < episode.duration as f64 {
            return None;
        }

        self.position = 0.0;
        if self.looping {
            log::debug!("Looping {}", episode.title);
            None
        } else {
            Some(TransportEvent::Ended)
        }
    }

    /// Move the position by `delta` seconds, clamped to the episode
    pub fn seek_by(&mut self, delta: f64) {
        let duration = self.duration();
        self.position = (self.position + delta).clamp(0.0, duration);
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.loaded
            .as_ref()
            .map(|(_, episode)| episode.duration as f64)
            .unwrap_or(0.0)
    }

    /// Progress through the current episode, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        let duration = self.duration();
        if duration > 0.0 {
            (self.position / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
}
