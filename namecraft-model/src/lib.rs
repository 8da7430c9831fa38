//! Read-only metadata records consumed by the namecraft rename engine.
//!
//! The host gathers one [`FileMetadata`] bundle per file from its own
//! repositories; nothing in this crate performs I/O or mutates a record once
//! it has been handed over.
#![allow(missing_docs)]

pub mod bundle;
pub mod episode;
pub mod error;
pub mod files;
pub mod prelude;
pub mod release;
pub mod series;
pub mod titles;

pub use bundle::{FileMetadata, LinkState};
pub use episode::{EpisodeKind, EpisodeRecord};
pub use error::{ModelError, Result as ModelResult};
pub use files::{MediaFile, Resolution};
pub use release::ReleaseRecord;
pub use series::{SeriesKind, SeriesRecord};
pub use titles::{EpisodeTitle, SeriesTitle, TitleKind, TitleLanguage};
