// Collapsing of formatter-broken i18n fallback strings.
//
// A formatter run split the fallback literal in
// `{{ $t('no_description') || 'No description available' }}`
// across lines, leaving a newline and arbitrary indentation inside the
// quoted string. This module recognizes every variant of that breakage
// and rewrites it to the canonical single-line form.

use regex::{NoExpand, Regex};

/// The broken interpolation: `{{ $t('no_description') || 'No description
/// <whitespace> available' }}` with any mix of spaces, tabs, and newlines
/// between the two words and around the delimiters.
const BROKEN: &str =
    r"\{\{\s*\$t\('no_description'\)\s*\|\|\s*'No description\s+available'\s*\}\}";

/// The canonical single-line form every match is rewritten to.
pub const CANONICAL: &str = "{{ $t('no_description') || 'No description available' }}";

/// Outcome of a normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeResult {
    /// The fully substituted text.
    pub text: String,
    /// Whether the text differs from the input.
    pub changed: bool,
    /// How many matches were actually rewritten (matches already in
    /// canonical form are not counted).
    pub rewritten: usize,
}

/// Replace every broken occurrence in `input` with [`CANONICAL`].
///
/// Matching is global and non-overlapping; text outside match spans is
/// preserved byte-for-byte. The canonical form itself matches the pattern
/// (`\s+` accepts a single space), so `changed` is computed from the
/// rewritten-match count rather than from match presence. That is what
/// makes a second pass over normalized output report no change.
pub fn normalize(input: &str) -> NormalizeResult {
    let re = Regex::new(BROKEN).unwrap();

    let rewritten = re
        .find_iter(input)
        .filter(|m| m.as_str() != CANONICAL)
        .count();

    if rewritten == 0 {
        return NormalizeResult {
            text: input.to_string(),
            changed: false,
            rewritten: 0,
        };
    }

    // NoExpand: CANONICAL contains `$t`, which would otherwise be
    // interpreted as a capture-group reference and expand to nothing.
    let text = re.replace_all(input, NoExpand(CANONICAL)).into_owned();
    NormalizeResult {
        text,
        changed: true,
        rewritten,
    }
}
