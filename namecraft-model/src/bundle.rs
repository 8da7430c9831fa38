use crate::episode::EpisodeRecord;
use crate::files::MediaFile;
use crate::release::ReleaseRecord;
use crate::series::SeriesRecord;

/// How a file is associated with catalog episodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkState {
    /// Identified by hash; a [`ReleaseRecord`] is available.
    Release,
    /// Attached to episodes by hand, without release metadata.
    Manual,
    /// Neither release metadata nor episodes.
    Unlinked,
}

/// Everything known about one file, handed to the rename engine as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileMetadata {
    pub file: MediaFile,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release: Option<ReleaseRecord>,
    /// Episodes in catalog order; the first one drives episode tests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub episodes: Vec<EpisodeRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub series: Option<SeriesRecord>,
}

impl FileMetadata {
    pub fn new(file: MediaFile) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    pub fn with_release(mut self, release: ReleaseRecord) -> Self {
        self.release = Some(release);
        self
    }

    pub fn with_episode(mut self, episode: EpisodeRecord) -> Self {
        self.episodes.push(episode);
        self
    }

    pub fn with_series(mut self, series: SeriesRecord) -> Self {
        self.series = Some(series);
        self
    }

    pub fn link_state(&self) -> LinkState {
        match (&self.release, self.episodes.is_empty()) {
            (Some(_), _) => LinkState::Release,
            (None, false) => LinkState::Manual,
            (None, true) => LinkState::Unlinked,
        }
    }

    pub fn is_manually_linked(&self) -> bool {
        self.link_state() == LinkState::Manual
    }

    pub fn has_linked_episode(&self) -> bool {
        !self.episodes.is_empty()
    }

    pub fn first_episode(&self) -> Option<&EpisodeRecord> {
        self.episodes.first()
    }

    /// Series id from the series record, falling back to the first episode.
    pub fn series_id(&self) -> Option<u64> {
        self.series
            .as_ref()
            .map(|s| s.series_id)
            .or_else(|| self.first_episode().map(|e| e.series_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode::EpisodeKind;

    fn file() -> MediaFile {
        MediaFile::new("show.mkv", "0123456789abcdef0123456789abcdef", 1024)
    }

    #[test]
    fn test_link_state() {
        let unlinked = FileMetadata::new(file());
        assert_eq!(unlinked.link_state(), LinkState::Unlinked);
        assert!(!unlinked.is_manually_linked());
        assert!(!unlinked.has_linked_episode());

        let manual = FileMetadata::new(file())
            .with_episode(EpisodeRecord::new(1, 7, 1, EpisodeKind::Normal));
        assert_eq!(manual.link_state(), LinkState::Manual);
        assert!(manual.is_manually_linked());
        assert!(manual.has_linked_episode());

        let released = manual.clone().with_release(ReleaseRecord::new(99));
        assert_eq!(released.link_state(), LinkState::Release);
        assert!(!released.is_manually_linked());
        assert!(released.has_linked_episode());
    }

    #[test]
    fn test_series_id_falls_back_to_episode() {
        let meta = FileMetadata::new(file())
            .with_episode(EpisodeRecord::new(1, 7, 1, EpisodeKind::Normal));
        assert_eq!(meta.series_id(), Some(7));

        let meta = meta.with_series(SeriesRecord::new(8, "Show"));
        assert_eq!(meta.series_id(), Some(8));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bundle_deserializes_with_optional_parts_missing() {
        let raw = r#"{
            "file": {
                "file_name": "a.mkv",
                "ed2k": "abc",
                "crc32": null,
                "size": 10,
                "resolution": "1280x720",
                "bit_depth": 8
            },
            "episodes": [
                { "episode_id": 3, "series_id": 4, "number": 2, "kind": "special" }
            ]
        }"#;
        let meta: FileMetadata = serde_json::from_str(raw).unwrap();
        assert!(meta.release.is_none());
        assert!(meta.series.is_none());
        assert_eq!(meta.episodes[0].kind, EpisodeKind::Special);
        assert_eq!(meta.link_state(), LinkState::Manual);
    }
}
