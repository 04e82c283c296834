use podplay_core::{PlayerSnapshot, PlayerStore, episode::format_seconds};
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::{
    router::{RouteAction, RouteHandler},
    state::AppState,
};

// ==================================================================
// Playback Route Implementation
// ==================================================================

#[derive(Debug, Clone)]
pub struct PlaybackRoute;

impl RouteHandler for PlaybackRoute {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        draw_playback_panel(frame, area, state);
    }

    fn handle_input(
        &mut self,
        key: KeyCode,
        _state: &mut AppState,
        store: &mut PlayerStore,
    ) -> anyhow::Result<RouteAction> {
        if key == KeyCode::Enter {
            store.toggle_play();
        }
        Ok(RouteAction::None)
    }

    fn name(&self) -> &str {
        "Playback"
    }

    fn help_items(&self, _state: &AppState) -> Vec<(&str, &str)> {
        vec![
            ("Space", "Play/Pause"),
            ("N/P", "Next/Prev"),
            ("L", "Loop"),
            ("S", "Shuffle"),
            ("←/→", "Seek"),
            ("C", "Clear"),
            ("Tab", "Switch Tab"),
            ("Q", "Quit"),
        ]
    }
}

/// Draw the playback panel
pub fn draw_playback_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Now playing info
            Constraint::Length(3), // Play button row
            Constraint::Length(3), // Progress bar
            Constraint::Min(0),
        ])
        .split(area);

    draw_now_playing(f, chunks[0], &state.playback.player);
    draw_play_button(f, chunks[1], &state.playback.player);
    draw_progress(f, chunks[2], state);
}

/// Draw the now playing section
fn draw_now_playing(f: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let block = Block::default()
        .title(" 🎧 Now Playing ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(episode) = player.current_episode() {
        let text = vec![
            Line::from(Span::styled(
                episode.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                episode.members.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                episode.thumbnail.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!(
                    "Episode {}/{}",
                    player.current_episode_index + 1,
                    player.episode_list.len()
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(text), inner);
    } else {
        let text = Paragraph::new("Select an episode to listen")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(text, inner);
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn toggle_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw the transport buttons: previous, play/pause, next, loop, shuffle
fn draw_play_button(f: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let has_episode = player.current_episode().is_some();
    let play_symbol = if player.is_playing { " ⏸ " } else { " ▶ " };

    let line = Line::from(vec![
        Span::styled(" 🔀 ", toggle_style(player.is_shuffling)),
        Span::styled(" ⏮ ", control_style(has_episode && player.has_previous)),
        Span::styled(
            play_symbol,
            control_style(has_episode).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ⏭ ", control_style(has_episode && player.has_next)),
        Span::styled(" 🔁 ", toggle_style(player.is_looping)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Draw the progress bar
fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let transport = &state.transport;
    let label = if transport.is_loaded() {
        progress_label(transport.position(), transport.duration())
    } else {
        "--:-- / --:--".to_string()
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(transport.progress())
        .label(label);

    f.render_widget(gauge, area);
}

/// "position / duration" in the same format as the episode list
fn progress_label(position: f64, duration: f64) -> String {
    format!(
        "{} / {}",
        format_seconds(position.max(0.0) as u64),
        format_seconds(duration.max(0.0) as u64)
    )
}

#[cfg(test)]
mod tests {
    use podplay_core::Episode;

    use super::*;

    #[test]
    fn progress_matches_the_episode_duration_format() {
        let episode = Episode::new("Long", "https://cdn.example.com/long.mp3", 3723);
        assert_eq!(
            progress_label(83.9, episode.duration as f64),
            format!("01:23 / {}", episode.formatted_duration())
        );
        assert_eq!(progress_label(3723.0, 3723.0), "01:02:03 / 01:02:03");
    }

    #[test]
    fn negative_position_reads_as_zero() {
        assert_eq!(progress_label(-4.0, 60.0), "00:00 / 01:00");
    }
}
