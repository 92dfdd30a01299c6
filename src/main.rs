use clap::{builder::RangedU64ValueParser, error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use wordsprint::{
    app::{App, AppAction},
    config::{Config, ConfigStore, FileConfigStore},
    language::{Language, PhrasePool},
    logging,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    session::{SessionConfig, SessionController, TestDuration},
    word_generator::MAX_MIN_WORDS,
};

/// calm multilingual typing speed test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A calm, minimal typing speed test in Italian, English, Spanish, French and German, with live WPM, accuracy and a short history of your recent runs."
)]
pub struct Cli {
    /// number of seconds to run test
    #[clap(short = 's', long, value_enum)]
    duration: Option<TestDuration>,

    /// language of the practice text
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// minimum number of words in the practice text (1-10000)
    #[clap(
        short = 'w',
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_MIN_WORDS as u64)
    )]
    min_words: Option<usize>,

    /// seed for the text generator, for reproducible practice texts
    #[clap(long)]
    seed: Option<u64>,

    /// write logs to this file (filter with WORDSPRINT_LOG, default info)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// read settings from this file instead of the default config location
    #[clap(long)]
    config: Option<PathBuf>,

    /// save the effective settings to the config file and exit
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags override the config file, which overrides built-in defaults
    fn session_config(&self, file: &Config) -> SessionConfig {
        let base = SessionConfig::from(file);
        SessionConfig {
            language: self.language.unwrap_or(base.language),
            duration: self.duration.unwrap_or(base.duration),
            min_words: self.min_words.unwrap_or(base.min_words),
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = logging::resolve_log_path(cli.log_file.clone()) {
        logging::init(&path)?;
    }

    let store = cli.config_store();
    let session_config = cli.session_config(&store.load());

    if cli.save_config {
        store.save(&Config::from(&session_config))?;
        println!("saved settings to {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let pool = PhrasePool::builtin()?;
    tracing::info!(
        language = session_config.language.code(),
        duration = session_config.duration.secs(),
        min_words = session_config.min_words,
        "starting"
    );
    let mut app = App::new(SessionController::new(pool, session_config, cli.rng()));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::seconds());
    let outcome = start_tui(&mut terminal, &mut app, &mut runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        if app.handle(runner.step()) == AppAction::Quit {
            break;
        }

        // re-arm after each tick while running, cancel on reset or finish
        runner.sync(app.wants_tick());
    }

    Ok(())
}
