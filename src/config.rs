use crate::{
    app_dirs::AppDirs,
    language::Language,
    session::{SessionConfig, TestDuration},
    word_generator::{clamp_min_words, DEFAULT_MIN_WORDS},
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub duration_secs: u32,
    pub min_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            duration_secs: TestDuration::default().secs(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl Config {
    /// Duration from the file, falling back to the default for unsupported values
    pub fn duration(&self) -> TestDuration {
        TestDuration::from_secs(self.duration_secs).unwrap_or_default()
    }

    /// Minimum word count from the file, clamped to the supported range
    pub fn min_words(&self) -> usize {
        clamp_min_words(self.min_words)
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            language: cfg.language,
            duration: cfg.duration(),
            min_words: cfg.min_words(),
        }
    }
}

impl From<&SessionConfig> for Config {
    fn from(sc: &SessionConfig) -> Self {
        Self {
            language: sc.language,
            duration_secs: sc.duration.secs(),
            min_words: sc.min_words,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring unreadable config"
                );
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
