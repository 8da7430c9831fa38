//! # Namecraft Core
//!
//! Rule-based file naming for anime releases. A small line-oriented script
//! decides, for one file and its catalog metadata, which base name the file
//! should carry.
//!
//! ## Overview
//!
//! - **Scripts**: [`Script::parse`] turns text into statements once; bad lines
//!   are skipped, never fatal
//! - **Tests**: nineteen single-letter predicates combined with `;` and `,`
//! - **Actions**: `ADD` templates with `%xxx` placeholders, `REPLACE` and `FAIL`
//! - **Interpreter**: [`Renamer`] folds the statements over a name buffer and
//!   appends the original extension
//!
//! Everything is synchronous and free of I/O. A [`Renamer`] and a parsed
//! [`Script`] can be shared across threads.
//!
//! ## Examples
//!
//! ```
//! use namecraft_core::{Renamer, Script};
//! use namecraft_model::{
//!     EpisodeKind, EpisodeRecord, FileMetadata, MediaFile, ReleaseRecord, SeriesRecord,
//! };
//!
//! let mut series = SeriesRecord::new(1, "Cowboy Bebop");
//! series.episode_count_normal = 26;
//!
//! let meta = FileMetadata::new(MediaFile::new("bebop05.mkv", "ed2k", 1))
//!     .with_release(ReleaseRecord::new(1))
//!     .with_series(series)
//!     .with_episode(EpisodeRecord::new(5, 1, 5, EpisodeKind::Normal));
//!
//! let script = Script::parse("DO ADD '%ann - %enr'");
//! let name = Renamer::default().propose_name(&script, &meta);
//! assert_eq!(name.as_deref(), Some("Cowboy Bebop - 05.mkv"));
//! ```

#![allow(missing_docs)]

pub mod error;
pub mod interpreter;
pub mod sanitize;
pub mod script;
pub mod settings;

pub use error::{RenameError, Result};
pub use interpreter::{RenameOutcome, Renamer};
pub use sanitize::replace_invalid_path_characters;
pub use script::{Action, Condition, Line, Predicate, Script, ScriptLine, SkippedLine, Tag};
pub use settings::{DEFAULT_MAX_EPISODE_TITLE_LENGTH, RenamerSettings};

/// Stock script producing names such as
/// `[Coalgirls]_Highschool_of_the_Dead_-_01_(1920x1080_Blu-ray_H264)_[90CC6DC1].mkv`.
pub const DEFAULT_SCRIPT: &str = r#"// Sample Output: [Coalgirls]_Highschool_of_the_Dead_-_01_(1920x1080_Blu-ray_H264)_[90CC6DC1].mkv
// Sub group name
DO ADD '[%grp] '
// Anime Name, use english name if it exists, otherwise use the Romaji name
IF I(eng) DO ADD '%eng '
IF I(ann);I(!eng) DO ADD '%ann '
// Episode Number, don't use episode number for movies
IF T(!Movie) DO ADD '- %enr'
// If the file version is v2 or higher add it here
IF F(!1) DO ADD 'v%ver'
// Video Resolution
DO ADD ' (%res'
// Video Source (only if blu-ray or DVD)
IF R(DVD),R(Blu-ray) DO ADD ' %src'
// Video Codec
DO ADD ' %vid'
// Video Bit Depth (only if 10bit)
IF Z(10) DO ADD ' %bitbit'
DO ADD ') '
DO ADD '[%CRC]'

// Replacement rules (cleanup)
DO REPLACE ' ' '_' // replace spaces with underscores
DO REPLACE 'H264/AVC' 'H264'
DO REPLACE '0x0' ''
DO REPLACE '__' '_'
DO REPLACE '__' '_'

// Replace all illegal file name characters
DO REPLACE '<' '('
DO REPLACE '>' ')'
DO REPLACE ':' '-'
DO REPLACE '"' '`'
DO REPLACE '/' '_'
DO REPLACE '\' '_'
DO REPLACE '|' '_'
DO REPLACE '?' '_'
DO REPLACE '*' '_'
"#;
