use ratatui::{buffer::Buffer, layout::Rect};

use crate::{
    app::{App, AppState},
    ui::{render_typing, render_welcome},
};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Landing screen shown once on startup
pub struct WelcomeScreen;

impl Screen for WelcomeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_welcome(app, area, buf);
    }
}

/// Typing screen - controls, live stats, practice text, input and history.
/// Also shows the finished summary once the countdown ends.
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_typing(app, area, buf);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Welcome => Box::new(WelcomeScreen),
        AppState::Typing => Box::new(TypingScreen),
    }
}
