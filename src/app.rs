use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{rngs::StdRng, Rng};
use tracing::debug;

use crate::{history::CompletedResult, runtime::AppEvent, session::SessionController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Typing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Top-level state container: created on startup, dropped on exit
#[derive(Debug)]
pub struct App<R: Rng = StdRng> {
    pub controller: SessionController<R>,
    pub state: AppState,
}

impl<R: Rng> App<R> {
    pub fn new(controller: SessionController<R>) -> Self {
        Self {
            controller,
            state: AppState::Welcome,
        }
    }

    /// Whether the countdown should have a tick pending
    pub fn wants_tick(&self) -> bool {
        self.controller.is_running()
    }

    pub fn handle(&mut self, event: AppEvent) -> AppAction {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Tick => {
                self.on_tick();
                AppAction::Continue
            }
            AppEvent::Resize => AppAction::Continue,
            AppEvent::Closed => AppAction::Quit,
        }
    }

    pub fn on_tick(&mut self) -> Option<CompletedResult> {
        self.controller.on_tick()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('c') if ctrl => return AppAction::Quit,
            _ => {}
        }

        if self.state == AppState::Welcome {
            debug!("leaving welcome screen");
            self.state = AppState::Typing;
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Tab => {
                let next = self.controller.duration().next();
                self.controller.set_duration(next);
            }
            KeyCode::BackTab => {
                let next = self.controller.language().next();
                self.controller.set_language(next);
            }
            KeyCode::Char('r') if ctrl => self.controller.reset(),
            KeyCode::Enter => {
                self.controller.commit_word();
            }
            KeyCode::Backspace => {
                self.controller.backspace();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.controller.type_char(c);
            }
            _ => {}
        }
        AppAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        language::{Language, PhrasePool},
        session::{Phase, SessionConfig, TestDuration},
    };
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;

    fn create_test_app() -> App {
        let pool = PhrasePool::from_sentences([
            (Language::It, vec!["ciao mondo"]),
            (Language::En, vec!["hello world"]),
        ]);
        let controller = SessionController::new(
            pool,
            SessionConfig {
                language: Language::It,
                duration: TestDuration::Fifteen,
                min_words: 4,
            },
            StdRng::seed_from_u64(1),
        );
        App::new(controller)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typing_app() -> App {
        let mut app = create_test_app();
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Typing);
        app
    }

    #[test]
    fn test_welcome_any_key_starts_typing_without_input() {
        let mut app = create_test_app();
        assert_eq!(app.state, AppState::Welcome);

        assert_eq!(app.on_key(key(KeyCode::Char('x'))), AppAction::Continue);

        assert_eq!(app.state, AppState::Typing);
        assert!(app.controller.state().pending_input.is_empty());
        assert_eq!(app.controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert_eq!(app.on_key(key(KeyCode::Esc)), AppAction::Quit);

        let mut app = typing_app();
        assert_eq!(app.on_key(ctrl('c')), AppAction::Quit);
        assert_eq!(app.handle(AppEvent::Closed), AppAction::Quit);
    }

    #[test]
    fn test_typing_and_commit_keys() {
        let mut app = typing_app();

        for c in "ciao".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        app.on_key(key(KeyCode::Char(' ')));
        for c in "mondx".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        app.on_key(key(KeyCode::Backspace));
        app.on_key(key(KeyCode::Char('o')));
        app.on_key(key(KeyCode::Enter));

        assert_eq!(
            app.controller.state().confirmed_words,
            vec!["ciao".to_string(), "mondo".to_string()]
        );
        assert!(app.wants_tick());
        assert_eq!(app.controller.score().accuracy, 100);
    }

    #[test]
    fn test_tab_cycles_duration_and_resets() {
        let mut app = typing_app();
        app.on_key(key(KeyCode::Char('c')));
        assert!(app.wants_tick());

        app.on_key(key(KeyCode::Tab));

        assert_eq!(app.controller.duration(), TestDuration::Thirty);
        assert!(!app.wants_tick());
        assert!(app.controller.state().pending_input.is_empty());
    }

    #[test]
    fn test_backtab_cycles_language() {
        let mut app = typing_app();

        app.on_key(key(KeyCode::BackTab));

        assert_eq!(app.controller.language(), Language::En);
        assert_eq!(app.controller.practice_text().word(0), Some("hello"));
    }

    #[test]
    fn test_ctrl_r_resets_without_typing_r() {
        let mut app = typing_app();
        app.on_key(key(KeyCode::Char('c')));

        app.on_key(ctrl('r'));

        assert!(app.controller.state().pending_input.is_empty());
        assert_eq!(app.controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = typing_app();
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        app.on_key(release);

        assert!(app.controller.state().pending_input.is_empty());
    }

    #[test]
    fn test_ticks_finish_session() {
        let mut app = typing_app();
        app.on_key(key(KeyCode::Char('c')));

        for _ in 0..15 {
            app.handle(AppEvent::Tick);
        }

        assert!(app.controller.has_finished());
        assert!(!app.wants_tick());
        assert_eq!(app.controller.history().len(), 1);

        // typing is disabled once finished
        app.on_key(key(KeyCode::Char('x')));
        assert_eq!(app.controller.state().pending_input, "c");
    }
}
