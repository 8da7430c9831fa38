/// Characters that cannot appear in file names on common platforms, paired
/// with visually similar replacements.
const INVALID_PATH_CHARACTERS: [(char, char); 9] = [
    ('*', '\u{2605}'),
    ('|', '\u{00A6}'),
    ('\\', '\u{29F9}'),
    ('/', '\u{2044}'),
    (':', '\u{0589}'),
    ('"', '\u{2033}'),
    ('>', '\u{203A}'),
    ('<', '\u{2039}'),
    ('?', '\u{FF1F}'),
];

const ONE_DOT_LEADER: char = '\u{2024}';

/// Swap path-hostile characters for look-alikes.
///
/// `...` collapses to `…`, and a dot at either end becomes a one dot
/// leader so the name is never hidden or left with a dangling dot. `name` is
/// the stem only: leading whitespace is dropped, trailing whitespace is kept
/// because the extension follows it.
pub fn replace_invalid_path_characters(name: &str) -> String {
    let mut out: String = name
        .trim_start()
        .chars()
        .map(|ch| {
            INVALID_PATH_CHARACTERS
                .iter()
                .find(|(bad, _)| *bad == ch)
                .map_or(ch, |(_, good)| *good)
        })
        .collect();

    out = out.replace("...", "\u{2026}");

    if let Some(rest) = out.strip_prefix('.') {
        out = format!("{ONE_DOT_LEADER}{rest}");
    }
    if let Some(rest) = out.strip_suffix('.') {
        out = format!("{rest}{ONE_DOT_LEADER}");
    }
    out
}
