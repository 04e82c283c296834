use anyhow::Result;
use podplay_core::PlayerStore;
use ratatui::{Frame, crossterm::event::KeyCode, layout::Rect};

use crate::{
    routes::{episodes::EpisodesRoute, log::LogRoute, playback::PlaybackRoute},
    state::{ActiveTab, AppState},
};

/// Trait that all routes must implement
pub trait RouteHandler: std::fmt::Debug {
    /// Render this route's UI
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);

    /// Handle keyboard input for this route
    fn handle_input(
        &mut self,
        key: KeyCode,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> Result<RouteAction>;

    /// Display name, matches the tab name for top level routes
    fn name(&self) -> &str;

    /// Called before the route becomes the top of the stack. An error keeps
    /// the stack as it was.
    fn on_enter(&mut self, _state: &mut AppState, _store: &mut PlayerStore) -> Result<()> {
        Ok(())
    }

    fn help_items(&self, _state: &AppState) -> Vec<(&str, &str)> {
        vec![("Tab", "Switch Tab"), ("Q", "Quit")]
    }
}

/// Actions that can be returned from route handlers
#[derive(Debug)]
pub enum RouteAction {
    /// Do nothing, stay on current route
    None,
    /// Go back to previous route
    Pop,
    /// Navigate to a new route
    Push(Box<dyn RouteHandler>),
}

/// Router manages the navigation stack
pub struct Router {
    /// Stack of route handlers, last element is current route
    stack: Vec<Box<dyn RouteHandler>>,
}

impl Router {
    pub fn new(initial_route: Box<dyn RouteHandler>) -> Self {
        Self {
            stack: vec![initial_route],
        }
    }

    /// Get current route (top of stack)
    pub fn current(&self) -> &dyn RouteHandler {
        self.stack
            .last()
            .expect("Stack should never be empty")
            .as_ref()
    }

    pub fn current_mut(&mut self) -> &mut Box<dyn RouteHandler> {
        self.stack.last_mut().expect("Stack should never be empty")
    }

    /// Tab the current stack belongs to
    pub fn active_tab(&self) -> ActiveTab {
        ActiveTab::from_name(self.stack[0].name()).unwrap_or_default()
    }

    pub fn execute_action(
        &mut self,
        action: RouteAction,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> Result<()> {
        match action {
            RouteAction::None => Ok(()),
            RouteAction::Pop => {
                self.pop();
                Ok(())
            }
            RouteAction::Push(route) => self.push(route, state, store),
        }
    }

    pub fn push(
        &mut self,
        mut route: Box<dyn RouteHandler>,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> Result<()> {
        route.on_enter(state, store)?;
        self.stack.push(route);
        Ok(())
    }

    /// Go back, keeping at least one route in the stack
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            return true;
        }
        false
    }

    /// Clear the stack and switch to another tab
    pub fn switch_tab(
        &mut self,
        tab: ActiveTab,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> Result<()> {
        self.reset(route_for_tab(tab), state, store)
    }

    /// Replace the whole stack with `route` once it has been entered
    fn reset(
        &mut self,
        mut route: Box<dyn RouteHandler>,
        state: &mut AppState,
        store: &mut PlayerStore,
    ) -> Result<()> {
        route.on_enter(state, store)?;
        self.stack.clear();
        self.stack.push(route);
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Get the top level route handler for a tab
pub fn route_for_tab(tab: ActiveTab) -> Box<dyn RouteHandler> {
    match tab {
        ActiveTab::Playback => Box::new(PlaybackRoute),
        ActiveTab::Episodes => Box::new(EpisodesRoute),
        ActiveTab::Log => Box::new(LogRoute),
    }
}
