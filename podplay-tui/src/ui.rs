use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{
    router::Router,
    state::{ActiveTab, AppState},
};

/// Draw the TUI interface
pub fn draw(f: &mut Frame, state: &AppState, router: &Router) {
    // Sidebar (left) and main content (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Length(15), Constraint::Min(40)])
        .split(f.area());

    draw_sidebar(f, main_chunks[0], router.active_tab());
    draw_main_content(f, main_chunks[1], state, router);
}

/// Draw the sidebar navigation
fn draw_sidebar(f: &mut Frame, area: Rect, active: ActiveTab) {
    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav_text: Vec<Line> = ActiveTab::iter()
        .map(|tab| {
            let is_active = tab == active;
            let prefix = if is_active { "▶ " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{}{}", prefix, tab), style))
        })
        .collect();

    f.render_widget(Paragraph::new(nav_text), inner);
}

/// Draw the current route with the global footers below it
fn draw_main_content(f: &mut Frame, area: Rect, state: &AppState, router: &Router) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Route content
            Constraint::Length(3), // Controls info
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let route = router.current();
    route.render(f, chunks[0], state);

    draw_controls(f, chunks[1], route.help_items(state));
    draw_status(f, chunks[2], state);
}

fn draw_controls(f: &mut Frame, area: Rect, items: Vec<(&str, &str)>) {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (key, action) in items {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Controls ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, area: Rect, state: &AppState) {
    let player = &state.playback.player;
    let flag = |on: bool, label: &'static str| {
        Span::styled(
            label,
            if on {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )
    };

    let line = Line::from(vec![
        Span::styled(
            state.status_message().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        flag(player.is_looping, "[loop] "),
        flag(player.is_shuffling, "[shuffle]"),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}
