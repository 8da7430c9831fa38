use crate::error::{ModelError, Result};
use crate::titles::{SeriesTitle, TitleKind, TitleLanguage};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Broadcast format of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeriesKind {
    TvSeries,
    TvSpecial,
    Ova,
    Movie,
    Web,
    MusicVideo,
    Other,
}

impl SeriesKind {
    /// Catalog spelling, which is what scripts compare against.
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKind::TvSeries => "TV Series",
            SeriesKind::TvSpecial => "TV Special",
            SeriesKind::Ova => "OVA",
            SeriesKind::Movie => "Movie",
            SeriesKind::Web => "Web",
            SeriesKind::MusicVideo => "Music Video",
            SeriesKind::Other => "Other",
        }
    }
}

impl Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let kind = match raw.trim().to_ascii_lowercase().as_str() {
            "tv series" | "tv" => SeriesKind::TvSeries,
            "tv special" => SeriesKind::TvSpecial,
            "ova" => SeriesKind::Ova,
            "movie" => SeriesKind::Movie,
            "web" => SeriesKind::Web,
            "music video" => SeriesKind::MusicVideo,
            "other" => SeriesKind::Other,
            _ => return Err(ModelError::InvalidSeriesKind(raw.to_string())),
        };
        Ok(kind)
    }
}

/// Catalog metadata for the series a file belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeriesRecord {
    pub series_id: u64,
    /// Preferred display title, used when no localized title fits.
    pub main_title: String,
    pub begin_year: Option<i32>,
    pub episode_count_normal: u32,
    pub episode_count_special: u32,
    pub kind: Option<SeriesKind>,
    pub titles: Vec<SeriesTitle>,
}

impl SeriesRecord {
    pub fn new(series_id: u64, main_title: impl Into<String>) -> Self {
        Self {
            series_id,
            main_title: main_title.into(),
            ..Self::default()
        }
    }

    pub fn with_title(
        mut self,
        language: TitleLanguage,
        kind: TitleKind,
        title: impl Into<String>,
    ) -> Self {
        self.titles.push(SeriesTitle::new(language, kind, title));
        self
    }

    /// First main or official title in `language`.
    pub fn official_title(&self, language: TitleLanguage) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.language == language && t.kind.is_main_or_official() && !t.title.is_empty())
            .map(|t| t.title.as_str())
    }

    /// First title flagged as the main title, in any language.
    pub fn any_main_title(&self) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.kind == TitleKind::Main && !t.title.is_empty())
            .map(|t| t.title.as_str())
    }
}
