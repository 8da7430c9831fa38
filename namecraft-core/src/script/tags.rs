//! Placeholder tags and the metadata they render.

use crate::settings::RenamerSettings;
use namecraft_model::{EpisodeKind, FileMetadata, Resolution, TitleLanguage};
use std::fmt;

/// A `%xxx` placeholder. Codes are three characters and case-sensitive in
/// actions (`%ED2` and `%ed2` differ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    AnimeId,
    EnglishTitle,
    MainTitle,
    KanjiTitle,
    EpisodeTitleEnglish,
    EpisodeTitleRomaji,
    EpisodeNumber,
    EpisodeCount,
    DubLanguages,
    SubLanguages,
    VideoCodec,
    AudioCodec,
    BitDepth,
    Resolution,
    VideoHeight,
    Source,
    SeriesKind,
    Year,
    GroupShortName,
    GroupLongName,
    GroupId,
    Ed2kUpper,
    Ed2kLower,
    CrcUpper,
    CrcLower,
    FileVersion,
    OriginalName,
    Censored,
    Deprecated,
    FileId,
    EpisodeId,
}

impl Tag {
    pub const ALL: [Tag; 31] = [
        Tag::AnimeId,
        Tag::EnglishTitle,
        Tag::MainTitle,
        Tag::KanjiTitle,
        Tag::EpisodeTitleEnglish,
        Tag::EpisodeTitleRomaji,
        Tag::EpisodeNumber,
        Tag::EpisodeCount,
        Tag::DubLanguages,
        Tag::SubLanguages,
        Tag::VideoCodec,
        Tag::AudioCodec,
        Tag::BitDepth,
        Tag::Resolution,
        Tag::VideoHeight,
        Tag::Source,
        Tag::SeriesKind,
        Tag::Year,
        Tag::GroupShortName,
        Tag::GroupLongName,
        Tag::GroupId,
        Tag::Ed2kUpper,
        Tag::Ed2kLower,
        Tag::CrcUpper,
        Tag::CrcLower,
        Tag::FileVersion,
        Tag::OriginalName,
        Tag::Censored,
        Tag::Deprecated,
        Tag::FileId,
        Tag::EpisodeId,
    ];

    /// Code without the leading `%`.
    pub fn code(self) -> &'static str {
        match self {
            Tag::AnimeId => "aid",
            Tag::EnglishTitle => "eng",
            Tag::MainTitle => "ann",
            Tag::KanjiTitle => "kan",
            Tag::EpisodeTitleEnglish => "epn",
            Tag::EpisodeTitleRomaji => "epr",
            Tag::EpisodeNumber => "enr",
            Tag::EpisodeCount => "eps",
            Tag::DubLanguages => "dub",
            Tag::SubLanguages => "sub",
            Tag::VideoCodec => "vid",
            Tag::AudioCodec => "aud",
            Tag::BitDepth => "bit",
            Tag::Resolution => "res",
            Tag::VideoHeight => "vhe",
            Tag::Source => "src",
            Tag::SeriesKind => "typ",
            Tag::Year => "yea",
            Tag::GroupShortName => "grp",
            Tag::GroupLongName => "grl",
            Tag::GroupId => "gid",
            Tag::Ed2kUpper => "ED2",
            Tag::Ed2kLower => "ed2",
            Tag::CrcUpper => "CRC",
            Tag::CrcLower => "crc",
            Tag::FileVersion => "ver",
            Tag::OriginalName => "sna",
            Tag::Censored => "cen",
            Tag::Deprecated => "dep",
            Tag::FileId => "fid",
            Tag::EpisodeId => "eid",
        }
    }

    /// Exact, case-sensitive lookup as used inside `ADD` text.
    pub fn from_code(code: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.code() == code)
    }

    /// Lookup for existence probes, where `I(ED2)` and `I(ed2)` mean the same.
    pub fn from_name_ignore_case(name: &str) -> Option<Tag> {
        let name = name.trim().trim_start_matches('%');
        Tag::ALL
            .into_iter()
            .find(|tag| tag.code().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.code())
    }
}

/// Renders tags against one metadata bundle.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    meta: &'a FileMetadata,
    settings: &'a RenamerSettings,
}

impl<'a> Resolver<'a> {
    pub fn new(meta: &'a FileMetadata, settings: &'a RenamerSettings) -> Self {
        Self { meta, settings }
    }

    /// Text for `tag`, or `None` when the bundle has nothing to offer.
    pub fn resolve(&self, tag: Tag) -> Option<String> {
        let meta = self.meta;
        let release = meta.release.as_ref();
        let series = meta.series.as_ref();

        match tag {
            Tag::AnimeId => meta.series_id().map(|id| id.to_string()),
            Tag::EnglishTitle => series
                .and_then(|s| s.official_title(TitleLanguage::English))
                .map(str::to_string),
            Tag::MainTitle => series.and_then(|s| {
                s.official_title(TitleLanguage::Romaji)
                    .or_else(|| s.any_main_title())
                    .or(Some(s.main_title.as_str()))
                    .map(str::to_string)
            }),
            Tag::KanjiTitle => series
                .and_then(|s| s.official_title(TitleLanguage::Japanese))
                .map(str::to_string),
            Tag::EpisodeTitleEnglish => self.episode_title(TitleLanguage::English),
            Tag::EpisodeTitleRomaji => self.episode_title(TitleLanguage::Romaji),
            Tag::EpisodeNumber => self.episode_number(),
            Tag::EpisodeCount => meta
                .first_episode()
                .map(|ep| self.episode_count(ep.kind).to_string()),
            Tag::DubLanguages => release.map(|r| r.audio_languages.join(",")),
            Tag::SubLanguages => release.map(|r| r.subtitle_languages.join(",")),
            Tag::VideoCodec => release.and_then(|r| r.video_codec.clone()),
            Tag::AudioCodec => release.and_then(|r| r.audio_codecs.first().cloned()),
            Tag::BitDepth => meta.file.bit_depth.map(|depth| depth.to_string()),
            Tag::Resolution => self.resolution_text().map(str::to_string),
            Tag::VideoHeight => self
                .resolution_text()
                .and_then(|res| res.split_once('x'))
                .map(|(_, height)| height.trim().to_string()),
            Tag::Source => release.and_then(|r| r.source.clone()),
            Tag::SeriesKind => series.and_then(|s| s.kind).map(|k| k.as_str().to_string()),
            Tag::Year => series.and_then(|s| s.begin_year).map(|y| y.to_string()),
            Tag::GroupShortName => release
                .and_then(|r| {
                    known_group(r.group_short_name.as_deref())
                        .or(known_group(r.group_name.as_deref()))
                })
                .map(str::to_string),
            Tag::GroupLongName => release
                .and_then(|r| {
                    known_group(r.group_name.as_deref())
                        .or(known_group(r.group_short_name.as_deref()))
                })
                .map(str::to_string),
            Tag::GroupId => release.and_then(|r| r.group_id).map(|id| id.to_string()),
            Tag::Ed2kUpper => non_empty(Some(meta.file.ed2k.as_str())).map(|h| h.to_uppercase()),
            Tag::Ed2kLower => non_empty(Some(meta.file.ed2k.as_str())).map(|h| h.to_lowercase()),
            Tag::CrcUpper => non_empty(meta.file.crc32.as_deref()).map(|c| c.to_uppercase()),
            Tag::CrcLower => non_empty(meta.file.crc32.as_deref()).map(|c| c.to_lowercase()),
            Tag::FileVersion => release.map(|r| r.version.to_string()),
            Tag::OriginalName => release
                .and_then(|r| r.original_stem())
                .map(str::to_string),
            Tag::Censored => release
                .and_then(|r| r.is_censored)
                .map(|censored| (if censored { "cen" } else { "unc" }).to_string()),
            Tag::Deprecated => release
                .map(|r| (if r.is_deprecated { "DEPR" } else { "New" }).to_string()),
            Tag::FileId => release.map(|r| r.file_id.to_string()),
            Tag::EpisodeId => meta.first_episode().map(|ep| ep.episode_id.to_string()),
        }
    }

    /// Rendered text; missing data becomes an empty string.
    pub fn render(&self, tag: Tag) -> String {
        self.resolve(tag).unwrap_or_default()
    }

    /// Whether `tag` would render to something non-empty.
    pub fn exists(&self, tag: Tag) -> bool {
        self.resolve(tag).is_some_and(|text| !text.is_empty())
    }

    /// Resolution string from the file, falling back to the release.
    pub fn resolution_text(&self) -> Option<&'a str> {
        let meta = self.meta;
        non_empty(meta.file.resolution.as_deref()).or_else(|| {
            meta.release
                .as_ref()
                .and_then(|r| non_empty(r.resolution.as_deref()))
        })
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution_text()?.parse().ok()
    }

    fn episode_title(&self, language: TitleLanguage) -> Option<String> {
        let title = self.meta.first_episode()?.title(language)?;
        Some(truncate_title(title, self.settings.max_episode_title_length))
    }

    /// Reference count used to size episode-number padding.
    fn episode_count(&self, kind: EpisodeKind) -> u32 {
        let Some(series) = self.meta.series.as_ref() else {
            return 1;
        };
        match kind {
            EpisodeKind::Normal => series.episode_count_normal,
            EpisodeKind::Special => series.episode_count_special,
            _ => 1,
        }
    }

    fn episode_number(&self) -> Option<String> {
        let first = self.meta.episodes.first()?;
        let width = episode_padding(self.episode_count(first.kind));

        let mut number = format!("{}{:0width$}", first.kind.prefix(), first.number);
        if let [_, .., last] = self.meta.episodes.as_slice() {
            number.push_str(&format!("-{:0width$}", last.number));
        }
        Some(number)
    }
}

/// Digits needed to pad episode numbers for a series with `count` entries,
/// never fewer than two.
pub fn episode_padding(count: u32) -> usize {
    count.to_string().len().max(2)
}

/// Cut titles longer than `max` characters to `max - 1` plus an ellipsis.
pub fn truncate_title(title: &str, max: usize) -> String {
    if max == 0 || title.chars().count() <= max {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Group name, treating the catalog's `raw` placeholder group as unknown.
fn known_group(value: Option<&str>) -> Option<&str> {
    non_empty(value).filter(|name| !name.trim().eq_ignore_ascii_case("raw"))
}
