use podplay_core::PlayerStore;
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    router::{RouteAction, RouteHandler},
    state::AppState,
};

/// Episode list view
#[derive(Debug, Clone)]
pub struct EpisodesRoute;

impl RouteHandler for EpisodesRoute {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        draw_episode_list(frame, area, state);
    }

    fn handle_input(
        &mut self,
        key: KeyCode,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> anyhow::Result<RouteAction> {
        match key {
            KeyCode::Up => state.episodes.prev(),
            KeyCode::Down => state.episodes.next(),
            KeyCode::Enter => {
                if let Some(index) = state.episodes.selected_index() {
                    store.play_list(state.episodes.episodes.clone(), index);
                }
            }
            KeyCode::Char('o') => {
                if let Some(episode) = state.episodes.selected() {
                    store.play(episode.clone());
                }
            }
            KeyCode::Char('i') => {
                if let Some(index) = state.episodes.selected_index() {
                    return Ok(RouteAction::Push(Box::new(EpisodeDetailRoute::new(index))));
                }
            }
            _ => {}
        }
        Ok(RouteAction::None)
    }

    fn name(&self) -> &str {
        "Episodes"
    }

    fn help_items(&self, _state: &AppState) -> Vec<(&str, &str)> {
        vec![
            ("↑/↓", "Select"),
            ("Enter", "Play From Here"),
            ("O", "Play Only This"),
            ("I", "Details"),
            ("Tab", "Switch Tab"),
            ("Q", "Quit"),
        ]
    }
}

/// Draw the episode list
pub fn draw_episode_list(f: &mut Frame, area: Rect, state: &AppState) {
    let list = &state.episodes;
    let playing = list.playing_row(&state.playback.player);

    let block = Block::default()
        .title(format!(" Episodes ({}) ", list.episodes.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if list.is_empty() {
        let empty_msg = Paragraph::new("No episodes loaded. Pass a feed file as argument.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = list
        .episodes
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let is_current = playing == Some(i);
            let prefix = if is_current { "▶ " } else { "  " };
            let title_style = if is_current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, episode.title), title_style),
                Span::styled(
                    format!("  {}", episode.members),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  {}", episode.formatted_duration()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = list.list_state.clone();
    f.render_stateful_widget(widget, area, &mut list_state);
}

/// Details of one feed episode, pushed on top of the list
#[derive(Debug, Clone)]
pub struct EpisodeDetailRoute {
    index: usize,
}

impl EpisodeDetailRoute {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RouteHandler for EpisodeDetailRoute {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Episode ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let Some(episode) = state.episodes.episodes.get(self.index) else {
            frame.render_widget(Paragraph::new("Episode not found").block(block), area);
            return;
        };

        let label = Style::default().fg(Color::DarkGray);
        let text = vec![
            Line::from(Span::styled(
                episode.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Members:   ", label),
                Span::raw(episode.members.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Duration:  ", label),
                Span::raw(episode.formatted_duration()),
            ]),
            Line::from(vec![
                Span::styled("Artwork:   ", label),
                Span::raw(episode.thumbnail.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Source:    ", label),
                Span::raw(episode.url.as_str()),
            ]),
        ];

        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn handle_input(
        &mut self,
        key: KeyCode,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> anyhow::Result<RouteAction> {
        match key {
            KeyCode::Enter => {
                store.play_list(state.episodes.episodes.clone(), self.index);
                Ok(RouteAction::Pop)
            }
            KeyCode::Char('o') => {
                if let Some(episode) = state.episodes.episodes.get(self.index) {
                    store.play(episode.clone());
                }
                Ok(RouteAction::Pop)
            }
            _ => Ok(RouteAction::None),
        }
    }

    fn name(&self) -> &str {
        "Episode"
    }

    fn on_enter(&mut self, state: &mut AppState, _store: &mut PlayerStore) -> anyhow::Result<()> {
        if self.index >= state.episodes.episodes.len() {
            anyhow::bail!("No episode at row {}", self.index);
        }
        state.episodes.list_state.select(Some(self.index));
        Ok(())
    }

    fn help_items(&self, _state: &AppState) -> Vec<(&str, &str)> {
        vec![
            ("Enter", "Play From Here"),
            ("O", "Play Only This"),
            ("Esc", "Back"),
        ]
    }
}
