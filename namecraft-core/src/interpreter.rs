use crate::sanitize::replace_invalid_path_characters;
use crate::script::{Action, Line, Resolver, Script};
use crate::settings::RenamerSettings;
use namecraft_model::{FileMetadata, LinkState};
use std::fmt;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Result of running a script against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// New base name, extension included.
    Renamed(String),
    /// An `IF ... DO FAIL` statement matched on this line.
    Failed { line: usize },
    /// The script ran but produced no text.
    Empty,
    /// The file has no episodes attached.
    Unlinked,
    /// No series record was supplied.
    MissingSeries,
    /// The current file name has no extension to carry over.
    MissingExtension,
}

impl RenameOutcome {
    pub fn name(&self) -> Option<&str> {
        match self {
            RenameOutcome::Renamed(name) => Some(name),
            _ => None,
        }
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            RenameOutcome::Renamed(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed(name) => write!(f, "renamed to {name}"),
            RenameOutcome::Failed { line } => write!(f, "script failed on line {line}"),
            RenameOutcome::Empty => write!(f, "script produced an empty name"),
            RenameOutcome::Unlinked => write!(f, "file is not linked to any episode"),
            RenameOutcome::MissingSeries => write!(f, "series metadata is missing"),
            RenameOutcome::MissingExtension => write!(f, "file has no extension"),
        }
    }
}

/// Runs rename scripts. Holds no per-file state, so one instance can serve
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    settings: RenamerSettings,
}

impl Renamer {
    pub fn new(settings: RenamerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenamerSettings {
        &self.settings
    }

    /// Run `script` over `meta` and explain the result.
    pub fn evaluate(&self, script: &Script, meta: &FileMetadata) -> RenameOutcome {
        let outcome = self.run(script, meta);
        match &outcome {
            RenameOutcome::Renamed(name) => debug!("{} -> {}", meta.file.file_name, name),
            other => debug!("{} not renamed: {}", meta.file.file_name, other),
        }
        outcome
    }

    /// New base name for `meta`, or `None` when the file should keep its name.
    pub fn propose_name(&self, script: &Script, meta: &FileMetadata) -> Option<String> {
        self.evaluate(script, meta).into_name()
    }

    /// Parse `script` and run it once.
    pub fn propose_name_from_text(&self, script: &str, meta: &FileMetadata) -> Option<String> {
        self.propose_name(&Script::parse(script), meta)
    }

    fn run(&self, script: &Script, meta: &FileMetadata) -> RenameOutcome {
        if meta.link_state() == LinkState::Unlinked || !meta.has_linked_episode() {
            return RenameOutcome::Unlinked;
        }
        if meta.series.is_none() {
            return RenameOutcome::MissingSeries;
        }
        let Some(extension) = meta.file.extension() else {
            return RenameOutcome::MissingExtension;
        };

        let resolver = Resolver::new(meta, &self.settings);
        let flow = script.lines().iter().try_fold(String::new(), |buffer, line| {
            if !line.matches(meta) {
                trace!("line {} skipped", line.number);
                return ControlFlow::Continue(buffer);
            }
            if let Line::Always(Action::Fail) = line.line {
                debug!("line {}: FAIL without a condition is ignored", line.number);
                return ControlFlow::Continue(buffer);
            }
            trace!("line {} matched", line.number);
            match line.action().apply(buffer, &resolver) {
                ControlFlow::Continue(buffer) => ControlFlow::Continue(buffer),
                ControlFlow::Break(()) => ControlFlow::Break(line.number),
            }
        });

        match flow {
            ControlFlow::Break(line) => RenameOutcome::Failed { line },
            ControlFlow::Continue(buffer) => self.finish(buffer, extension),
        }
    }

    fn finish(&self, buffer: String, extension: &str) -> RenameOutcome {
        let mut name = buffer.replace('`', "'");
        if self.settings.replace_invalid_path_characters {
            name = replace_invalid_path_characters(&name);
        }
        if name.is_empty() {
            return RenameOutcome::Empty;
        }
        name.push_str(extension);
        RenameOutcome::Renamed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namecraft_model::{EpisodeKind, EpisodeRecord, MediaFile, ReleaseRecord, SeriesRecord};

    fn meta() -> FileMetadata {
        let mut series = SeriesRecord::new(1, "Show");
        series.episode_count_normal = 12;
        FileMetadata::new(MediaFile::new("old name.mkv", "abc", 1))
            .with_release(ReleaseRecord::new(10))
            .with_series(series)
            .with_episode(EpisodeRecord::new(5, 1, 7, EpisodeKind::Normal))
    }

    fn run(script: &str, meta: &FileMetadata) -> RenameOutcome {
        Renamer::default().evaluate(&Script::parse(script), meta)
    }

    #[test]
    fn test_episode_number_with_extension() {
        assert_eq!(
            run("DO ADD '%enr - '", &meta()),
            RenameOutcome::Renamed("07 - .mkv".into())
        );
    }

    #[test]
    fn test_fail_reports_line() {
        let outcome = run("DO ADD 'x'\n// note\nIF E(7) DO FAIL\nDO ADD 'y'", &meta());
        assert_eq!(outcome, RenameOutcome::Failed { line: 3 });
        assert_eq!(outcome.into_name(), None);
    }

    #[test]
    fn test_unconditional_fail_is_ignored() {
        assert_eq!(
            run("DO ADD 'x'\nDO FAIL\nDO ADD 'y'", &meta()),
            RenameOutcome::Renamed("xy.mkv".into())
        );
        assert_eq!(run("do fail", &meta()), RenameOutcome::Empty);
    }

    #[test]
    fn test_contract_violations() {
        let mut unlinked = meta();
        unlinked.episodes.clear();
        assert_eq!(run("DO ADD 'x'", &unlinked), RenameOutcome::Unlinked);

        let mut no_series = meta();
        no_series.series = None;
        assert_eq!(run("DO ADD 'x'", &no_series), RenameOutcome::MissingSeries);

        let mut no_extension = meta();
        no_extension.file.file_name = "noext".into();
        assert_eq!(run("DO ADD 'x'", &no_extension), RenameOutcome::MissingExtension);
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(run("", &meta()), RenameOutcome::Empty);
        assert_eq!(run("DO ADD '%crc'", &meta()), RenameOutcome::Empty);
        assert_eq!(run("IF E(1) DO ADD 'x'", &meta()), RenameOutcome::Empty);
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        assert_eq!(
            run("DO ADD '  Show - %enr '", &meta()),
            RenameOutcome::Renamed("Show - 07 .mkv".into())
        );
        assert_eq!(run("DO ADD '   '", &meta()), RenameOutcome::Empty);
    }

    #[test]
    fn test_backticks_become_quotes() {
        assert_eq!(
            run("DO ADD 'Don`t Stop'", &meta()).into_name().as_deref(),
            Some("Don't Stop.mkv")
        );
    }

    #[test]
    fn test_path_character_replacement_is_optional() {
        let script = Script::parse("DO ADD 'A: B?'");
        assert_eq!(
            Renamer::default().propose_name(&script, &meta()).as_deref(),
            Some("A։ B？.mkv")
        );

        let raw = Renamer::new(RenamerSettings {
            replace_invalid_path_characters: false,
            ..RenamerSettings::default()
        });
        assert_eq!(raw.propose_name(&script, &meta()).as_deref(), Some("A: B?.mkv"));
    }

    #[test]
    fn test_manual_link_renames() {
        let mut manual = meta();
        manual.release = None;
        assert_eq!(
            Renamer::default()
                .propose_name_from_text("IF M() DO ADD '%ann - %enr'", &manual)
                .as_deref(),
            Some("Show - 07.mkv")
        );
    }
}
