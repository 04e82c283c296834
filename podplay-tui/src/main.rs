use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use podplay_core::{PlayerStore, feed};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod config;
#[macro_use]
mod macros;
mod router;
mod routes;
mod state;
mod states;
mod transport;
mod ui;

use config::AppConfig;
use router::{Router, route_for_tab};
use state::{ActiveTab, AppState};
use transport::TransportEvent;

fn main() -> anyhow::Result<()> {
    // Initialize tui_logger for TUI log display
    tui_logger::init_logger(log::LevelFilter::Debug).context("Failed to init tui_logger")?;
    tui_logger::set_default_level(log::LevelFilter::Debug);

    log::info!("Starting podplay");

    let config = config::load_config();

    // Feed from the command line, falling back to the configured one
    let feed_path = std::env::args().nth(1).or_else(|| config.feed_path.clone());
    let episodes = match feed_path {
        Some(path) => feed::load_episodes(Path::new(&path))
            .with_context(|| format!("Cannot load episode feed {}", path))?,
        None => {
            log::warn!("No episode feed given");
            Vec::new()
        }
    };

    run_tui(config, episodes)
}

fn run_tui(config: AppConfig, episodes: Vec<podplay_core::Episode>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &config, episodes);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    episodes: Vec<podplay_core::Episode>,
) -> anyhow::Result<()> {
    let mut store = PlayerStore::new();
    let mut state = AppState::new(&mut store, episodes, config);
    let mut router = Router::new(route_for_tab(ActiveTab::Episodes));
    let tick = Duration::from_millis(config.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        // Bring views and transport up to date with the store
        state.sync();

        let now = Instant::now();
        match state.transport.advance(now - last_tick) {
            Some(TransportEvent::Ended) => store.handle_episode_ended(),
            Some(TransportEvent::Stopped) => store.set_playing_state(false),
            None => {}
        }
        last_tick = now;

        terminal.draw(|f| ui::draw(f, &state, &router))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let should_quit =
                        handle_global_keys(key.code, &mut state, &mut store, &mut router)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
    }

    log::info!("Shutting down");
    Ok(())
}

fn has_playlist(state: &AppState) -> bool {
    !state.playback.player.episode_list.is_empty()
}

/// Handle global keys and delegate route-specific input to router
fn handle_global_keys(
    key: KeyCode,
    state: &mut AppState,
    store: &mut PlayerStore,
    router: &mut Router,
) -> anyhow::Result<bool> {
    handlers!(state, key => {
        fn quit(KeyCode::Char('q')) {
            return Ok(true);
        }
        fn toggle_play(KeyCode::Char(' '), has_playlist) {
            store.toggle_play();
        }
        fn next(KeyCode::Char('n')) {
            store.play_next();
        }
        fn previous(KeyCode::Char('p')) {
            store.play_previous();
        }
        fn toggle_loop(KeyCode::Char('l')) {
            store.toggle_loop();
        }
        fn toggle_shuffle(KeyCode::Char('s')) {
            store.toggle_shuffling();
        }
        fn clear(KeyCode::Char('c'), has_playlist) {
            store.clear_player_state();
        }
        fn seek_back(KeyCode::Left) {
            state.transport.seek_by(-state.seek_step);
        }
        fn seek_forward(KeyCode::Right) {
            state.transport.seek_by(state.seek_step);
        }
        fn switch_tab(KeyCode::Tab) {
            let next = router.active_tab().next();
            router.switch_tab(next, state, store)?;
        }
        fn back(KeyCode::Esc, |_: &AppState| router.depth() > 1) {
            router.pop();
        }
    } else {
        let action = router.current_mut().handle_input(key, state, store)?;
        router.execute_action(action, state, store)?;
        Ok(false)
    })
}

#[cfg(test)]
mod tests {
    use podplay_core::Episode;

    use super::*;

    fn setup() -> (AppState, PlayerStore, Router) {
        let mut store = PlayerStore::new();
        let feed = vec![
            Episode::new("One", "https://cdn.example.com/1.mp3", 120),
            Episode::new("Two", "https://cdn.example.com/2.mp3", 120),
        ];
        let state = AppState::new(&mut store, feed, &AppConfig::default());
        let router = Router::new(route_for_tab(ActiveTab::Episodes));
        (state, store, router)
    }

    #[test]
    fn q_quits() {
        let (mut state, mut store, mut router) = setup();
        assert!(handle_global_keys(KeyCode::Char('q'), &mut state, &mut store, &mut router).unwrap());
    }

    #[test]
    fn space_needs_a_playlist() {
        let (mut state, mut store, mut router) = setup();

        handle_global_keys(KeyCode::Char(' '), &mut state, &mut store, &mut router).unwrap();
        assert!(!store.state().is_playing());

        handle_global_keys(KeyCode::Enter, &mut state, &mut store, &mut router).unwrap();
        state.sync();
        handle_global_keys(KeyCode::Char(' '), &mut state, &mut store, &mut router).unwrap();
        assert!(!store.state().is_playing());
        assert_eq!(store.state().episode_list().len(), 2);
    }

    #[test]
    fn flag_keys_toggle_the_store() {
        let (mut state, mut store, mut router) = setup();

        handle_global_keys(KeyCode::Char('l'), &mut state, &mut store, &mut router).unwrap();
        handle_global_keys(KeyCode::Char('s'), &mut state, &mut store, &mut router).unwrap();

        assert!(store.state().is_looping());
        assert!(store.state().is_shuffling());
    }

    #[test]
    fn tab_and_escape_navigate() {
        let (mut state, mut store, mut router) = setup();

        handle_global_keys(KeyCode::Char('i'), &mut state, &mut store, &mut router).unwrap();
        assert_eq!(router.depth(), 2);
        handle_global_keys(KeyCode::Esc, &mut state, &mut store, &mut router).unwrap();
        assert_eq!(router.depth(), 1);

        handle_global_keys(KeyCode::Tab, &mut state, &mut store, &mut router).unwrap();
        assert_eq!(router.active_tab(), ActiveTab::Log);
    }
}
