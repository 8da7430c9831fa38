/// Release metadata identified for a specific file by hash lookup.
///
/// Absent for files that were linked to episodes by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReleaseRecord {
    pub file_id: u64,
    pub group_id: Option<u32>,
    /// Long name of the release group, e.g. `Coalgirls`.
    pub group_name: Option<String>,
    pub group_short_name: Option<String>,
    /// Starts at 1 and increases for each re-release by the same group.
    pub version: u32,
    pub audio_languages: Vec<String>,
    pub subtitle_languages: Vec<String>,
    pub video_codec: Option<String>,
    pub audio_codecs: Vec<String>,
    /// Rip source, e.g. `Blu-ray`, `DVD`, `TV`, `www`.
    pub source: Option<String>,
    pub resolution: Option<String>,
    pub is_censored: Option<bool>,
    pub is_deprecated: bool,
    /// File name the release was published under.
    pub original_file_name: Option<String>,
}

impl ReleaseRecord {
    pub fn new(file_id: u64) -> Self {
        Self {
            file_id,
            version: 1,
            ..Self::default()
        }
    }

    /// Original release file name without its extension.
    pub fn original_stem(&self) -> Option<&str> {
        let name = self.original_file_name.as_deref()?;
        match name.rfind('.') {
            Some(0) | None => Some(name),
            Some(dot) => Some(&name[..dot]),
        }
    }
}
