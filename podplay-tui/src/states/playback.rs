use podplay_core::PlayerSnapshot;

/// What the playback views render: the latest store snapshot plus the
/// status line derived from it
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub player: PlayerSnapshot,
    pub status_message: String,
}

impl PlaybackState {
    pub fn new(player: PlayerSnapshot) -> Self {
        let status_message = Self::status_for(&player);
        Self {
            player,
            status_message,
        }
    }

    pub fn update(&mut self, player: PlayerSnapshot) {
        self.status_message = Self::status_for(&player);
        self.player = player;
    }

    fn status_for(player: &PlayerSnapshot) -> String {
        match player.current_episode() {
            None if player.episode_list.is_empty() => "Nothing queued".to_string(),
            None => "No episode at the selected position".to_string(),
            Some(episode) => format!(
                "{} {} ({}/{})",
                if player.is_playing { "Playing" } else { "Paused" },
                episode.title,
                player.current_episode_index + 1,
                player.episode_list.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use podplay_core::Episode;

    use super::*;

    #[test]
    fn status_follows_the_snapshot() {
        let mut playback = PlaybackState::new(PlayerSnapshot::default());
        assert_eq!(playback.status_message, "Nothing queued");

        playback.update(PlayerSnapshot {
            episode_list: vec![
                Episode::new("One", "https://cdn.example.com/1.mp3", 10),
                Episode::new("Two", "https://cdn.example.com/2.mp3", 10),
            ]
            .into(),
            current_episode_index: 1,
            is_playing: true,
            ..Default::default()
        });
        assert_eq!(playback.status_message, "Playing Two (2/2)");
    }
}
