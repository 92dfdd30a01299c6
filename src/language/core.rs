use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::{collections::HashMap, error::Error};

static LANG_DIR: Dir = include_dir!("src/lang");

/// Languages a practice text can be generated in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[strum(to_string = "IT")]
    It,
    #[strum(to_string = "EN")]
    En,
    #[strum(to_string = "ES")]
    Es,
    #[strum(to_string = "FR")]
    Fr,
    #[strum(to_string = "DE")]
    De,
}

impl Language {
    /// All languages in the order they are offered to the user
    pub const ALL: [Language; 5] = [
        Language::It,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Next language in offer order, wrapping around
    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// On-disk shape of an embedded language file
#[derive(Deserialize, Clone, Debug)]
pub struct LanguageFile {
    pub code: Language,
    pub name: String,
    pub sentences: Vec<String>,
}

/// Sentences available for each language. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct PhrasePool {
    sentences: HashMap<Language, Vec<String>>,
    names: HashMap<Language, String>,
}

impl PhrasePool {
    /// Load the pool bundled into the binary
    pub fn builtin() -> Result<Self, Box<dyn Error>> {
        let mut pool = Self::default();
        for lang in Language::ALL {
            let file = read_language_from_file(format!("{}.json", lang.code()))?;
            if file.code != lang {
                return Err(format!(
                    "language file {}.json declares code {}",
                    lang.code(),
                    file.code.code()
                )
                .into());
            }
            pool.names.insert(lang, file.name);
            pool.sentences.insert(lang, file.sentences);
        }
        Ok(pool)
    }

    /// Build a pool from in-memory sentences; languages not listed have no sentences
    pub fn from_sentences<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, Vec<S>)>,
        S: Into<String>,
    {
        let sentences = entries
            .into_iter()
            .map(|(lang, s)| (lang, s.into_iter().map(Into::into).collect()))
            .collect();
        Self {
            sentences,
            names: HashMap::new(),
        }
    }

    pub fn sentences(&self, language: Language) -> &[String] {
        self.sentences
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Native display name, falling back to the upper-case code
    pub fn display_name(&self, language: Language) -> String {
        self.names
            .get(&language)
            .cloned()
            .unwrap_or_else(|| language.to_string())
    }
}

fn read_language_from_file(file_name: String) -> Result<LanguageFile, Box<dyn Error>> {
    let file = LANG_DIR
        .get_file(&file_name)
        .ok_or_else(|| format!("language file not found: {file_name}"))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| format!("language file is not valid utf-8: {file_name}"))?;

    Ok(from_str(file_as_str)?)
}
