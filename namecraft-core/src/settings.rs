use serde::{Deserialize, Serialize};

/// Longest episode title the original renamer would emit before truncating.
pub const DEFAULT_MAX_EPISODE_TITLE_LENGTH: usize = 33;

/// Knobs that change how placeholders render and how the final name is
/// cleaned. Scripts themselves are supplied per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerSettings {
    /// Episode titles longer than this many characters are cut to one less
    /// and suffixed with `…`. Zero disables truncation.
    pub max_episode_title_length: usize,
    /// Swap characters that are illegal in file names for Unicode look-alikes
    /// before the extension is appended.
    pub replace_invalid_path_characters: bool,
}

impl Default for RenamerSettings {
    fn default() -> Self {
        Self {
            max_episode_title_length: DEFAULT_MAX_EPISODE_TITLE_LENGTH,
            replace_invalid_path_characters: true,
        }
    }
}
