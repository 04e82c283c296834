use podplay_core::{Episode, PlayerSnapshot};
use ratatui::widgets::ListState;

/// The loaded episode feed and the list selection
#[derive(Debug, Clone)]
pub struct EpisodeListState {
    pub episodes: Vec<Episode>,
    pub list_state: ListState,
}

impl EpisodeListState {
    pub fn new(episodes: Vec<Episode>) -> Self {
        let mut list_state = ListState::default();
        if !episodes.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            episodes,
            list_state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn next(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.episodes.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn prev(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.episodes.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&i| i < self.episodes.len())
    }

    pub fn selected(&self) -> Option<&Episode> {
        self.selected_index().and_then(|i| self.episodes.get(i))
    }

    /// Feed row that is playing. Only set while the playlist is the feed
    /// itself, so a single episode started with `play` marks no row.
    pub fn playing_row(&self, player: &PlayerSnapshot) -> Option<usize> {
        let index = player.current_episode_index;
        (index < self.episodes.len() && player.episode_list[..] == self.episodes[..]).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> Vec<Episode> {
        (0..3)
            .map(|i| Episode::new(format!("Episode {i}"), format!("https://cdn.example.com/{i}.mp3"), 60))
            .collect()
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut list = EpisodeListState::new(feed());
        assert_eq!(list.selected_index(), Some(0));

        list.prev();
        assert_eq!(list.selected_index(), Some(2));
        list.next();
        assert_eq!(list.selected_index(), Some(0));
        list.next();
        assert_eq!(list.selected().map(|e| e.title.as_str()), Some("Episode 1"));
    }

    #[test]
    fn empty_feed_has_no_selection() {
        let mut list = EpisodeListState::new(Vec::new());
        list.next();
        list.prev();
        assert!(list.selected().is_none());
    }

    #[test]
    fn marks_the_playing_row_of_the_feed() {
        let list = EpisodeListState::new(feed());
        let player = PlayerSnapshot {
            episode_list: list.episodes.clone().into(),
            current_episode_index: 2,
            is_playing: true,
            ..Default::default()
        };

        assert_eq!(list.playing_row(&player), Some(2));
        assert_eq!(list.playing_row(&PlayerSnapshot::default()), None);
    }

    #[test]
    fn single_episode_marks_no_row() {
        let list = EpisodeListState::new(feed());
        let player = PlayerSnapshot {
            episode_list: vec![list.episodes[2].clone()].into(),
            current_episode_index: 0,
            is_playing: true,
            ..Default::default()
        };

        assert_eq!(list.playing_row(&player), None);
    }

    #[test]
    fn out_of_range_index_marks_no_row() {
        let list = EpisodeListState::new(feed());
        let player = PlayerSnapshot {
            episode_list: list.episodes.clone().into(),
            current_episode_index: 7,
            ..Default::default()
        };

        assert_eq!(list.playing_row(&player), None);
    }
}
