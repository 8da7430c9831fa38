//! The nineteen single-letter tests usable in `IF` lines.

use super::operand::Operand;
use super::tags::{Resolver, Tag};
use crate::error::{RenameError, Result};
use crate::settings::RenamerSettings;
use namecraft_model::{FileMetadata, ReleaseRecord, SeriesRecord};
use tracing::{debug, warn};

/// Literal that matches a missing or empty field.
const UNKNOWN: &str = "unknown";
/// Literal that matches an empty subtitle list.
const NONE: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `A` anime id.
    AnimeId,
    /// `G` release group id, `G(unknown)` for files without one.
    GroupId,
    /// `F` file version.
    FileVersion,
    /// `E` number of the first episode.
    EpisodeNumber,
    /// `H` kind letter of the first episode.
    EpisodeKind,
    /// `X` normal episode count of the series.
    EpisodeCount,
    /// `R` rip source.
    Source,
    /// `T` series kind.
    SeriesKind,
    /// `Y` year the series began.
    Year,
    /// `D` dub language.
    DubLanguage,
    /// `S` subtitle language.
    SubLanguage,
    /// `C` video codec.
    VideoCodec,
    /// `J` audio codec of any track.
    AudioCodec,
    /// `I` the metadatum behind a tag exists.
    Exists,
    /// `Z` bit depth.
    BitDepth,
    /// `W` video width.
    Width,
    /// `U` video height.
    Height,
    /// `M` manually linked.
    ManuallyLinked,
    /// `N` linked to at least one episode.
    HasEpisode,
}

impl Predicate {
    pub const ALL: [Predicate; 19] = [
        Predicate::AnimeId,
        Predicate::GroupId,
        Predicate::FileVersion,
        Predicate::EpisodeNumber,
        Predicate::EpisodeKind,
        Predicate::EpisodeCount,
        Predicate::Source,
        Predicate::SeriesKind,
        Predicate::Year,
        Predicate::DubLanguage,
        Predicate::SubLanguage,
        Predicate::VideoCodec,
        Predicate::AudioCodec,
        Predicate::Exists,
        Predicate::BitDepth,
        Predicate::Width,
        Predicate::Height,
        Predicate::ManuallyLinked,
        Predicate::HasEpisode,
    ];

    pub fn letter(self) -> char {
        match self {
            Predicate::AnimeId => 'A',
            Predicate::GroupId => 'G',
            Predicate::FileVersion => 'F',
            Predicate::EpisodeNumber => 'E',
            Predicate::EpisodeKind => 'H',
            Predicate::EpisodeCount => 'X',
            Predicate::Source => 'R',
            Predicate::SeriesKind => 'T',
            Predicate::Year => 'Y',
            Predicate::DubLanguage => 'D',
            Predicate::SubLanguage => 'S',
            Predicate::VideoCodec => 'C',
            Predicate::AudioCodec => 'J',
            Predicate::Exists => 'I',
            Predicate::BitDepth => 'Z',
            Predicate::Width => 'W',
            Predicate::Height => 'U',
            Predicate::ManuallyLinked => 'M',
            Predicate::HasEpisode => 'N',
        }
    }

    /// Case-insensitive letter lookup.
    pub fn from_letter(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        Predicate::ALL
            .into_iter()
            .find(|p| p.letter() == upper)
            .ok_or(RenameError::UnknownTest(letter))
    }

    /// Evaluate against `meta`, reporting why a test could not be decided.
    pub fn try_evaluate(self, parameter: &str, meta: &FileMetadata) -> Result<bool> {
        match self {
            Predicate::AnimeId => {
                let expected = self.comparand(parameter)?;
                let actual = meta.series_id().ok_or(RenameError::MissingMetadata("series"))?;
                Ok(expected.matches(i64::try_from(actual).unwrap_or(i64::MAX)))
            }
            Predicate::GroupId => {
                let op = Operand::parse(parameter);
                if op.relation.is_none() && op.value.eq_ignore_ascii_case(UNKNOWN) {
                    let group_id = release(meta).ok().and_then(|r| r.group_id);
                    return Ok(op.apply(group_id.is_none()));
                }
                let expected = self.comparand(parameter)?;
                let actual = release(meta)?
                    .group_id
                    .ok_or(RenameError::MissingMetadata("group id"))?;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::FileVersion => {
                let expected = self.comparand(parameter)?;
                let actual = release(meta)?.version;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::EpisodeNumber => {
                let expected = self.comparand(parameter)?;
                let actual = meta
                    .first_episode()
                    .ok_or(RenameError::MissingMetadata("episode"))?
                    .number;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::EpisodeCount => {
                let expected = self.comparand(parameter)?;
                let actual = series(meta)?.episode_count_normal;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::Year => {
                let expected = self.comparand(parameter)?;
                let actual = series(meta)?
                    .begin_year
                    .ok_or(RenameError::MissingMetadata("begin year"))?;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::BitDepth => {
                let expected = self.comparand(parameter)?;
                let actual = meta
                    .file
                    .bit_depth
                    .ok_or(RenameError::MissingMetadata("bit depth"))?;
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::Width | Predicate::Height => {
                let expected = self.comparand(parameter)?;
                let settings = RenamerSettings::default();
                let resolution = Resolver::new(meta, &settings)
                    .resolution()
                    .ok_or(RenameError::MissingMetadata("resolution"))?;
                let actual = match self {
                    Predicate::Width => resolution.width,
                    _ => resolution.height,
                };
                Ok(expected.matches(i64::from(actual)))
            }
            Predicate::Source => {
                let op = Operand::negation_only(parameter);
                Ok(op.apply(sentinel_eq(release(meta)?.source.as_deref(), op.value)))
            }
            Predicate::VideoCodec => {
                let op = Operand::negation_only(parameter);
                Ok(op.apply(sentinel_eq(release(meta)?.video_codec.as_deref(), op.value)))
            }
            Predicate::SeriesKind => {
                let op = Operand::negation_only(parameter);
                let kind = series(meta)?.kind.map(|k| k.as_str());
                Ok(op.apply(sentinel_eq(kind, op.value)))
            }
            Predicate::EpisodeKind => {
                let op = Operand::negation_only(parameter);
                let letter = meta
                    .first_episode()
                    .ok_or(RenameError::MissingMetadata("episode"))?
                    .kind
                    .letter()
                    .to_string();
                Ok(op.apply(sentinel_eq(Some(letter.as_str()), op.value)))
            }
            Predicate::AudioCodec => {
                let op = Operand::negation_only(parameter);
                let codecs = &release(meta)?.audio_codecs;
                Ok(op.apply(list_contains(codecs, op.value, &[UNKNOWN])))
            }
            Predicate::DubLanguage => {
                let op = Operand::negation_only(parameter);
                let languages = &release(meta)?.audio_languages;
                Ok(op.apply(list_contains(languages, op.value, &[UNKNOWN])))
            }
            Predicate::SubLanguage => {
                let op = Operand::negation_only(parameter);
                let languages = &release(meta)?.subtitle_languages;
                Ok(op.apply(list_contains(languages, op.value, &[UNKNOWN, NONE])))
            }
            Predicate::Exists => {
                let op = Operand::negation_only(parameter);
                let tag = Tag::from_name_ignore_case(op.value)
                    .ok_or_else(|| RenameError::UnknownTag(op.value.to_string()))?;
                let present = match tag {
                    Tag::Censored => meta
                        .release
                        .as_ref()
                        .is_some_and(|r| r.is_censored == Some(true)),
                    Tag::Deprecated => meta.release.as_ref().is_some_and(|r| r.is_deprecated),
                    _ => {
                        let settings = RenamerSettings::default();
                        Resolver::new(meta, &settings).exists(tag)
                    }
                };
                Ok(op.apply(present))
            }
            Predicate::ManuallyLinked => {
                let op = Operand::negation_only(parameter);
                Ok(op.apply(meta.is_manually_linked()))
            }
            Predicate::HasEpisode => {
                let op = Operand::negation_only(parameter);
                Ok(op.apply(meta.has_linked_episode()))
            }
        }
    }

    /// Evaluate against `meta`; any fault counts as a miss.
    pub fn evaluate(self, parameter: &str, meta: &FileMetadata) -> bool {
        match self.try_evaluate(parameter, meta) {
            Ok(hit) => hit,
            Err(err @ RenameError::InvalidComparand { .. }) => {
                warn!("{}({}) evaluated false: {}", self.letter(), parameter, err);
                false
            }
            Err(err) => {
                debug!("{}({}) evaluated false: {}", self.letter(), parameter, err);
                false
            }
        }
    }

    fn comparand(self, parameter: &str) -> Result<NumericOperand<'_>> {
        let op = Operand::parse(parameter);
        let value = op
            .value
            .parse::<i64>()
            .map_err(|_| RenameError::InvalidComparand {
                test: self.letter(),
                value: op.value.to_string(),
            })?;
        Ok(NumericOperand { op, value })
    }
}

/// An operand whose value parsed as an integer.
#[derive(Debug, Clone, Copy)]
struct NumericOperand<'a> {
    op: Operand<'a>,
    value: i64,
}

impl NumericOperand<'_> {
    fn matches(&self, actual: i64) -> bool {
        self.op.compare(actual, self.value)
    }
}

fn release(meta: &FileMetadata) -> Result<&ReleaseRecord> {
    meta.release
        .as_ref()
        .ok_or(RenameError::MissingMetadata("release"))
}

fn series(meta: &FileMetadata) -> Result<&SeriesRecord> {
    meta.series
        .as_ref()
        .ok_or(RenameError::MissingMetadata("series"))
}

/// Case-insensitive equality where an absent or blank field reads as `unknown`.
fn sentinel_eq(actual: Option<&str>, expected: &str) -> bool {
    let actual = actual.map(str::trim).filter(|a| !a.is_empty()).unwrap_or(UNKNOWN);
    actual.to_lowercase() == expected.to_lowercase()
}

/// Membership test; an empty list matches any of `empty_aliases`.
fn list_contains(items: &[String], expected: &str, empty_aliases: &[&str]) -> bool {
    if items.iter().all(|item| item.trim().is_empty()) {
        return empty_aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(expected));
    }
    let expected = expected.to_lowercase();
    items
        .iter()
        .any(|item| item.trim().to_lowercase() == expected)
}
