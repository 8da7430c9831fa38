//! Shared fixtures for rename engine integration tests.
#![allow(dead_code)]

use namecraft_model::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route engine logs through the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Highschool of the Dead episode 1 as released by Coalgirls on Blu-ray.
pub fn coalgirls_release() -> FileMetadata {
    let mut release = ReleaseRecord::new(736_502);
    release.group_id = Some(4_243);
    release.group_name = Some("Coalgirls".into());
    release.group_short_name = Some("Coalgirls".into());
    release.audio_languages = vec!["japanese".into()];
    release.subtitle_languages = vec!["english".into()];
    release.video_codec = Some("H264/AVC".into());
    release.audio_codecs = vec!["FLAC".into()];
    release.source = Some("Blu-ray".into());
    release.resolution = Some("1920x1080".into());
    release.is_censored = Some(false);
    release.original_file_name =
        Some("[Coalgirls]_Highschool_of_the_Dead_01_(1920x1080_Blu-Ray_FLAC)_[90CC6DC1].mkv".into());

    FileMetadata::new(
        MediaFile::new("hotd_01.mkv", "8F1AE3C2B0D4E5F6A7B8C9D0E1F2A3B4", 1_363_148_800)
            .with_crc32("90cc6dc1")
            .with_resolution("1920x1080")
            .with_bit_depth(8),
    )
    .with_release(release)
    .with_series(hotd_series())
    .with_episode(
        EpisodeRecord::new(117_441, 7_334, 1, EpisodeKind::Normal)
            .with_title(TitleLanguage::English, "Spring of the Dead")
            .with_title(TitleLanguage::Romaji, "Spring of the DEAD"),
    )
}

pub fn hotd_series() -> SeriesRecord {
    let mut series = SeriesRecord::new(7_334, "Gakuen Mokushiroku: Highschool of the Dead")
        .with_title(
            TitleLanguage::Romaji,
            TitleKind::Main,
            "Gakuen Mokushiroku: Highschool of the Dead",
        )
        .with_title(TitleLanguage::English, TitleKind::Official, "Highschool of the Dead")
        .with_title(TitleLanguage::Japanese, TitleKind::Official, "学園黙示録 HIGHSCHOOL OF THE DEAD");
    series.begin_year = Some(2010);
    series.episode_count_normal = 12;
    series.episode_count_special = 6;
    series.kind = Some(SeriesKind::TvSeries);
    series
}

/// A file attached to episode `number` by hand, with no release record.
pub fn manual_link(number: u32) -> FileMetadata {
    FileMetadata::new(MediaFile::new("manual.mkv", "00FF", 10))
        .with_series(hotd_series())
        .with_episode(EpisodeRecord::new(1, 7_334, number, EpisodeKind::Normal))
}

/// Release bundle whose series has `count` normal episodes and whose file is
/// episode `number`.
pub fn numbered(number: u32, count: u32) -> FileMetadata {
    let mut meta = coalgirls_release();
    if let Some(series) = meta.series.as_mut() {
        series.episode_count_normal = count;
    }
    meta.episodes = vec![EpisodeRecord::new(2, 7_334, number, EpisodeKind::Normal)];
    meta
}

/// Copy of `meta` whose release carries file version `version`.
pub fn with_version(mut meta: FileMetadata, version: u32) -> FileMetadata {
    if let Some(release) = meta.release.as_mut() {
        release.version = version;
    }
    meta
}
