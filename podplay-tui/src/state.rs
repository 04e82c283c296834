use podplay_core::{Episode, PlayerStore, Subscription};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    config::AppConfig,
    states::{EpisodeListState, PlaybackState},
    transport::Transport,
};

/// Main tabs, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, strum::Display)]
pub enum ActiveTab {
    #[default]
    Playback,
    Episodes,
    Log,
}

impl ActiveTab {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|tab| tab.to_string() == name)
    }

    pub fn next(self) -> Self {
        let tabs: Vec<ActiveTab> = Self::iter().collect();
        let i = tabs.iter().position(|tab| *tab == self).unwrap_or(0);
        tabs[(i + 1) % tabs.len()]
    }
}

/// Application state for the TUI
pub struct AppState {
    /// Updates from the player store
    subscription: Subscription,
    pub playback: PlaybackState,
    pub episodes: EpisodeListState,
    pub transport: Transport,
    pub seek_step: f64,
}

impl AppState {
    pub fn new(store: &mut PlayerStore, episodes: Vec<Episode>, config: &AppConfig) -> Self {
        let subscription = store.subscribe();
        let playback = PlaybackState::new(store.snapshot());
        Self {
            subscription,
            playback,
            episodes: EpisodeListState::new(episodes),
            transport: Transport::new(store),
            seek_step: config.seek_step_secs,
        }
    }

    /// Drain store updates into the views and the transport
    pub fn sync(&mut self) {
        if let Some(snapshot) = self.subscription.latest() {
            self.playback.update(snapshot);
        }
        self.transport.sync();
    }

    pub fn status_message(&self) -> &str {
        &self.playback.status_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_order() {
        assert_eq!(ActiveTab::Playback.next(), ActiveTab::Episodes);
        assert_eq!(ActiveTab::Episodes.next(), ActiveTab::Log);
        assert_eq!(ActiveTab::Log.next(), ActiveTab::Playback);
        assert_eq!(ActiveTab::from_name("Episodes"), Some(ActiveTab::Episodes));
        assert_eq!(ActiveTab::from_name("Equalizer"), None);
    }

    #[test]
    fn sync_picks_up_store_changes() {
        let mut store = PlayerStore::new();
        let feed = vec![Episode::new("Pilot", "https://cdn.example.com/pilot.mp3", 90)];
        let mut state = AppState::new(&mut store, feed.clone(), &AppConfig::default());
        assert_eq!(state.status_message(), "Nothing queued");

        store.play_list(feed, 0);
        state.sync();

        assert!(state.playback.player.is_playing);
        assert_eq!(state.status_message(), "Playing Pilot (1/1)");
        assert!(state.transport.is_loaded());
    }
}
