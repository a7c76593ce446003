use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub mod normalize;

pub use normalize::{normalize, NormalizeResult, CANONICAL};

/// What a run of [`fix_file`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    /// Whether the file content needed rewriting.
    pub changed: bool,
    /// Number of broken occurrences collapsed.
    pub rewritten: usize,
    /// Whether the file was actually written back (false on dry runs
    /// and on clean files).
    pub written: bool,
}

/// Normalize the broken fallback strings in the file at `path`.
///
/// Reads the whole file as UTF-8, runs [`normalize`], and overwrites the
/// file in place only when something changed and `dry_run` is false. Each
/// file handle is scoped to its single read or write. I/O and decoding
/// failures propagate; there is no retry or recovery path.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let result = normalize(&content);

    if !result.changed {
        tracing::info!(path = %path.display(), "No broken occurrences found");
        return Ok(FixReport {
            changed: false,
            rewritten: 0,
            written: false,
        });
    }

    if dry_run {
        tracing::info!(
            path = %path.display(),
            rewritten = result.rewritten,
            "Dry run — file not written"
        );
        return Ok(FixReport {
            changed: true,
            rewritten: result.rewritten,
            written: false,
        });
    }

    fs::write(path, &result.text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rewritten = result.rewritten,
        "Rewrote file with collapsed occurrences"
    );

    Ok(FixReport {
        changed: true,
        rewritten: result.rewritten,
        written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BROKEN: &str = "{{ $t('no_description') ||\n  'No description\n      available' }}";

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_fix_file_rewrites_in_place() {
        let file = temp_file(&format!("<div>{BROKEN}</div>\n"));
        let report = fix_file(file.path(), false).unwrap();
        assert!(report.changed);
        assert!(report.written);
        assert_eq!(report.rewritten, 1);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            format!("<div>{CANONICAL}</div>\n")
        );
    }

    #[test]
    fn test_fix_file_leaves_clean_file_alone() {
        let content = format!("<div>{CANONICAL}</div>\n<p>text</p>\n");
        let file = temp_file(&content);
        let report = fix_file(file.path(), false).unwrap();
        assert!(!report.changed);
        assert!(!report.written);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
    }

    #[test]
    fn test_fix_file_second_run_is_noop() {
        let file = temp_file(&format!("{BROKEN}\n{BROKEN}\n"));
        let first = fix_file(file.path(), false).unwrap();
        assert!(first.changed);
        assert_eq!(first.rewritten, 2);

        let second = fix_file(file.path(), false).unwrap();
        assert!(!second.changed);
        assert!(!second.written);
    }

    #[test]
    fn test_fix_file_dry_run_does_not_write() {
        let content = format!("{BROKEN}\n");
        let file = temp_file(&content);
        let report = fix_file(file.path(), true).unwrap();
        assert!(report.changed);
        assert!(!report.written);
        assert_eq!(report.rewritten, 1);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
    }

    #[test]
    fn test_fix_file_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ManajemenNarasi.vue");
        assert!(fix_file(&missing, false).is_err());
    }
}
