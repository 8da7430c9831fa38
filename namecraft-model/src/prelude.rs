//! Convenience re-exports for building metadata bundles.

pub use crate::bundle::{FileMetadata, LinkState};
pub use crate::episode::{EpisodeKind, EpisodeRecord};
pub use crate::files::{MediaFile, Resolution};
pub use crate::release::ReleaseRecord;
pub use crate::series::{SeriesKind, SeriesRecord};
pub use crate::titles::{EpisodeTitle, SeriesTitle, TitleKind, TitleLanguage};
