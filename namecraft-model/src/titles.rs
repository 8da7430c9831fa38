/// Language a catalog title is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TitleLanguage {
    English,
    /// Japanese transcribed to latin script.
    Romaji,
    /// Japanese in kanji/kana.
    Japanese,
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// How authoritative a series title is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TitleKind {
    Main,
    Official,
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl TitleKind {
    pub fn is_main_or_official(self) -> bool {
        matches!(self, TitleKind::Main | TitleKind::Official)
    }
}

/// A localized series title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesTitle {
    pub language: TitleLanguage,
    pub kind: TitleKind,
    pub title: String,
}

impl SeriesTitle {
    pub fn new(language: TitleLanguage, kind: TitleKind, title: impl Into<String>) -> Self {
        Self {
            language,
            kind,
            title: title.into(),
        }
    }
}

/// A localized episode title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeTitle {
    pub language: TitleLanguage,
    pub title: String,
}

impl EpisodeTitle {
    pub fn new(language: TitleLanguage, title: impl Into<String>) -> Self {
        Self {
            language,
            title: title.into(),
        }
    }
}
