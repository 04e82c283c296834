use rand::Rng;

use crate::episode::Episode;

/// The "now playing" state: current playlist, position in it and the
/// playback flags shared by every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether `play_next` would move. Always true while shuffling.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index < self.episode_list.len().saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Episode at the current index, if the index points into the list
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Replace the playlist with a single episode and start playing it
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the playlist and start playing at `index`.
    ///
    /// The index is not range checked; an out-of-range index leaves
    /// `current_episode` empty until the next list change.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    /// Empty the playlist. The playing flag is left as is.
    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
    }

    /// Advance using the thread-local RNG when shuffling
    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::rng());
    }

    /// Advance to the next episode.
    ///
    /// While shuffling a uniformly random index is picked, which may be the
    /// current one. An empty list leaves the index untouched.
    pub fn play_next_with<R: Rng>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                log::debug!("Shuffle next ignored: playlist is empty");
                return;
            }
            self.current_episode_index = rng.random_range(0..self.episode_list.len());
        } else if self.has_next() {
            self.current_episode_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffling(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Sync the playing flag with what the playback primitive reports
    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }
}
