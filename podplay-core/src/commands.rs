use std::sync::Arc;

use crate::{episode::Episode, player::PlayerState};

/// Operations a view can request from the player store
#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum PlayerCommand {
    /// Play a single episode, discarding the current list
    Play(Episode),
    /// Play a list starting at the given index
    PlayList { list: Vec<Episode>, index: usize },
    /// Empty the playlist
    Clear,
    Next,
    Previous,
    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    /// Report the actual play/pause state of the playback primitive
    SetPlaying(bool),
    /// The playback primitive reached the end of the current episode
    EpisodeEnded,
}

/// A copy of the player state published to subscribers after a change.
///
/// The episode list is shared, so handing the same snapshot to several
/// subscribers does not copy it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub episode_list: Arc<[Episode]>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlayerSnapshot {
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}

impl From<&PlayerState> for PlayerSnapshot {
    fn from(state: &PlayerState) -> Self {
        Self {
            episode_list: Arc::from(state.episode_list()),
            current_episode_index: state.current_episode_index(),
            is_playing: state.is_playing(),
            is_looping: state.is_looping(),
            is_shuffling: state.is_shuffling(),
            has_next: state.has_next(),
            has_previous: state.has_previous(),
        }
    }
}
