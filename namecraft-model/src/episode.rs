use crate::error::{ModelError, Result};
use crate::titles::{EpisodeTitle, TitleLanguage};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Catalog classification of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EpisodeKind {
    #[default]
    Normal = 1,
    Credits = 2,
    Special = 3,
    Trailer = 4,
    Parody = 5,
    Other = 6,
}

impl EpisodeKind {
    /// Single-letter code used by scripts (`E`, `C`, `S`, `T`, `P`, `O`).
    pub fn letter(self) -> char {
        match self {
            EpisodeKind::Normal => 'E',
            EpisodeKind::Credits => 'C',
            EpisodeKind::Special => 'S',
            EpisodeKind::Trailer => 'T',
            EpisodeKind::Parody => 'P',
            EpisodeKind::Other => 'O',
        }
    }

    /// Prefix placed before the episode number; normal episodes have none.
    pub fn prefix(self) -> &'static str {
        match self {
            EpisodeKind::Normal => "",
            EpisodeKind::Credits => "C",
            EpisodeKind::Special => "S",
            EpisodeKind::Trailer => "T",
            EpisodeKind::Parody => "P",
            EpisodeKind::Other => "O",
        }
    }
}

impl Display for EpisodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeKind::Normal => write!(f, "Episode"),
            EpisodeKind::Credits => write!(f, "Credits"),
            EpisodeKind::Special => write!(f, "Special"),
            EpisodeKind::Trailer => write!(f, "Trailer"),
            EpisodeKind::Parody => write!(f, "Parody"),
            EpisodeKind::Other => write!(f, "Other"),
        }
    }
}

impl TryFrom<i16> for EpisodeKind {
    type Error = ModelError;

    fn try_from(value: i16) -> Result<Self> {
        match value {
            1 => Ok(EpisodeKind::Normal),
            2 => Ok(EpisodeKind::Credits),
            3 => Ok(EpisodeKind::Special),
            4 => Ok(EpisodeKind::Trailer),
            5 => Ok(EpisodeKind::Parody),
            6 => Ok(EpisodeKind::Other),
            other => Err(ModelError::InvalidEpisodeKind(other.to_string())),
        }
    }
}

impl FromStr for EpisodeKind {
    type Err = ModelError;

    /// Parses the single-letter code, case-insensitively.
    fn from_str(raw: &str) -> Result<Self> {
        let kind = match raw.trim().to_ascii_uppercase().as_str() {
            "E" => EpisodeKind::Normal,
            "C" => EpisodeKind::Credits,
            "S" => EpisodeKind::Special,
            "T" => EpisodeKind::Trailer,
            "P" => EpisodeKind::Parody,
            "O" => EpisodeKind::Other,
            _ => return Err(ModelError::InvalidEpisodeKind(raw.to_string())),
        };
        Ok(kind)
    }
}

/// Catalog metadata for one episode a file is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeRecord {
    pub episode_id: u64,
    pub series_id: u64,
    pub number: u32,
    pub kind: EpisodeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<EpisodeTitle>,
}

impl EpisodeRecord {
    pub fn new(episode_id: u64, series_id: u64, number: u32, kind: EpisodeKind) -> Self {
        Self {
            episode_id,
            series_id,
            number,
            kind,
            titles: Vec::new(),
        }
    }

    pub fn with_title(mut self, language: TitleLanguage, title: impl Into<String>) -> Self {
        self.titles.push(EpisodeTitle::new(language, title));
        self
    }

    /// First non-empty title in the requested language.
    pub fn title(&self, language: TitleLanguage) -> Option<&str> {
        self.titles
            .iter()
            .filter(|t| t.language == language)
            .map(|t| t.title.as_str())
            .find(|t| !t.is_empty())
    }
}
