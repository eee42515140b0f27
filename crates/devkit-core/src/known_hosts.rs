//! Reconciliation between the live `known_hosts` file and a vetted baseline.
//!
//! Lines are opaque: no key type, hostname or fingerprint parsing happens here.
//! File failures never propagate out of this module; an unreadable file reads
//! as an empty [`HostSet`] and an unwritable target is left untouched.

use crate::paths::KnownHostsPaths;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

// ---------------------------------------------------------------------------
// HostSet
// ---------------------------------------------------------------------------

/// Ordered, non-deduplicated host-key lines in file order.
///
/// Never contains blank or whitespace-only lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet(Vec<String>);

impl HostSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for HostSet {
    /// Collects lines through the same trim/discard rule as file reads.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|s| {
                    let line: String = s.into();
                    let trimmed = line.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                })
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Outcome of loading a host file, keeping "absent" apart from "empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// The file could not be opened or read.
    Missing,
    Loaded(HostSet),
}

impl HostSource {
    pub fn into_hosts(self) -> HostSet {
        match self {
            HostSource::Missing => HostSet::new(),
            HostSource::Loaded(hosts) => hosts,
        }
    }
}

/// Split `content` on newlines, trimming each line and dropping blanks.
pub fn parse_hosts(content: &str) -> HostSet {
    content.split('\n').collect()
}

pub fn load_hosts(path: &Path) -> HostSource {
    match std::fs::read(path) {
        Ok(bytes) => HostSource::Loaded(parse_hosts(&String::from_utf8_lossy(&bytes))),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "host file unavailable");
            HostSource::Missing
        }
    }
}

/// Read a host file, treating any failure as an empty set.
pub fn read_hosts(path: &Path) -> HostSet {
    load_hosts(path).into_hosts()
}

// ---------------------------------------------------------------------------
// Diff / reset
// ---------------------------------------------------------------------------

/// Lines of `active` that do not occur anywhere in `trusted`, in `active` order.
///
/// One-directional: entries only present in `trusted` are not reported.
pub fn diff(active: &HostSet, trusted: &HostSet) -> HostSet {
    let index: HashSet<&str> = trusted.iter().collect();
    HostSet(
        active
            .iter()
            .filter(|line| !index.contains(line))
            .map(str::to_string)
            .collect(),
    )
}

/// Overwrite `target` with `trusted`, one newline-terminated line per entry.
///
/// The target must already exist; a missing file is left missing. Returns the
/// number of lines written; 0 when the target could not be opened or written.
pub fn reset(trusted: &HostSet, target: &Path) -> usize {
    let opened = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target);
    let mut file = match opened {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(path = %target.display(), error = %e, "cannot open host file for writing");
            return 0;
        }
    };

    let mut buf = String::new();
    for line in trusted.iter() {
        buf.push_str(line);
        buf.push('\n');
    }

    match file.write_all(buf.as_bytes()).and_then(|_| file.flush()) {
        Ok(()) => trusted.len(),
        Err(e) => {
            tracing::debug!(path = %target.display(), error = %e, "failed writing host file");
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

/// Runs diff/reset against a concrete active/trusted file pair.
#[derive(Debug, Clone)]
pub struct Reconciler {
    paths: KnownHostsPaths,
}

impl Reconciler {
    pub fn new(paths: KnownHostsPaths) -> Self {
        Self { paths }
    }

    /// Active lines the trusted baseline has never seen.
    pub fn diff(&self) -> HostSet {
        let trusted = read_hosts(&self.paths.trusted);
        let active = read_hosts(&self.paths.active);
        tracing::debug!(
            active = active.len(),
            trusted = trusted.len(),
            "comparing known hosts"
        );
        diff(&active, &trusted)
    }

    /// Replace the active file with the trusted baseline.
    pub fn reset(&self) -> usize {
        let trusted = read_hosts(&self.paths.trusted);
        reset(&trusted, &self.paths.active)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn hosts(lines: &[&str]) -> HostSet {
        lines.iter().copied().collect()
    }

    fn ssh_home() -> (TempDir, KnownHostsPaths) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".ssh")).unwrap();
        let paths = KnownHostsPaths::from_home(dir.path());
        (dir, paths)
    }

    #[test]
    fn parse_drops_blank_and_whitespace_lines() {
        let set = parse_hosts("hostA key1\n\n   \n\thostB key2  \r\n");
        assert_eq!(set.lines(), ["hostA key1", "hostB key2"]);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let set = parse_hosts("b k\na k\nb k\n");
        assert_eq!(set.lines(), ["b k", "a k", "b k"]);
    }

    #[test]
    fn read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope");
        assert_eq!(load_hosts(&path), HostSource::Missing);
        assert!(read_hosts(&path).is_empty());
    }

    #[test]
    fn load_empty_file_is_loaded_not_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("known_hosts");
        std::fs::write(&path, "\n\n").unwrap();
        assert_eq!(load_hosts(&path), HostSource::Loaded(HostSet::new()));
    }

    #[test]
    fn diff_reports_unseen_active_lines() {
        let active = hosts(&["hostA key1", "hostB key2", ""]);
        let trusted = hosts(&["hostA key1"]);
        assert_eq!(diff(&active, &trusted).lines(), ["hostB key2"]);
    }

    #[test]
    fn diff_of_empty_active_is_empty() {
        let trusted = hosts(&["hostX keyN"]);
        assert!(diff(&HostSet::new(), &trusted).is_empty());
    }

    #[test]
    fn diff_ignores_trusted_only_lines() {
        let active = hosts(&["a 1"]);
        let trusted = hosts(&["a 1", "b 2", "c 3"]);
        assert!(diff(&active, &trusted).is_empty());
    }

    #[test]
    fn diff_does_not_touch_inputs() {
        let active = hosts(&["a 1", "b 2"]);
        let trusted = hosts(&["a 1"]);
        let _ = diff(&active, &trusted);
        assert_eq!(active.len(), 2);
        assert_eq!(trusted.len(), 1);
    }

    #[test]
    fn reset_replaces_prior_content() {
        let (_dir, paths) = ssh_home();
        std::fs::write(&paths.active, "old 1\nold 2\nstray 3\n").unwrap();

        let written = reset(&hosts(&["h1 k1", "h2 k2"]), &paths.active);

        assert_eq!(written, 2);
        let content = std::fs::read_to_string(&paths.active).unwrap();
        assert_eq!(content, "h1 k1\nh2 k2\n");
        assert!(!content.contains("stray"));
    }

    #[test]
    fn reset_then_read_returns_written_lines() {
        let (_dir, paths) = ssh_home();
        std::fs::write(&paths.active, "").unwrap();
        let trusted = hosts(&["h1 k1", "h2 k2", "h1 k1"]);
        assert_eq!(reset(&trusted, &paths.active), 3);
        assert_eq!(read_hosts(&paths.active), trusted);
    }

    #[test]
    fn reset_with_empty_set_truncates() {
        let (_dir, paths) = ssh_home();
        std::fs::write(&paths.active, "old 1\n").unwrap();
        assert_eq!(reset(&HostSet::new(), &paths.active), 0);
        assert_eq!(std::fs::read_to_string(&paths.active).unwrap(), "");
    }

    #[test]
    fn reset_missing_target_is_not_created() {
        let (_dir, paths) = ssh_home();
        assert_eq!(reset(&hosts(&["h1 k1"]), &paths.active), 0);
        assert!(!paths.active.exists());
    }

    #[test]
    fn reset_without_parent_dir_does_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("known_hosts");
        assert_eq!(reset(&hosts(&["h1 k1"]), &target), 0);
        assert!(!target.exists());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn reconciler_diff_and_reset() {
        let (_dir, paths) = ssh_home();
        std::fs::write(&paths.trusted, "a 1\nb 2\n").unwrap();
        std::fs::write(&paths.active, "a 1\nc 3\n\n").unwrap();

        let reconciler = Reconciler::new(paths.clone());
        assert_eq!(reconciler.diff().lines(), ["c 3"]);

        assert_eq!(reconciler.reset(), 2);
        assert!(reconciler.diff().is_empty());
        assert_eq!(read_hosts(&paths.active), read_hosts(&paths.trusted));
    }

    #[test]
    fn reconciler_without_files_is_quiet() {
        let (_dir, paths) = ssh_home();
        let reconciler = Reconciler::new(paths);
        assert!(reconciler.diff().is_empty());
    }

    fn host_line() -> impl Strategy<Value = String> {
        "[a-d]{1,2} [0-3]"
    }

    proptest! {
        #[test]
        fn diff_is_exact_complement(
            active in prop::collection::vec(host_line(), 0..20),
            trusted in prop::collection::vec(host_line(), 0..20),
        ) {
            let a: HostSet = active.iter().cloned().collect();
            let t: HostSet = trusted.iter().cloned().collect();
            let expected: Vec<String> = active
                .iter()
                .filter(|l| !trusted.contains(l))
                .cloned()
                .collect();

            let d = diff(&a, &t);
            prop_assert_eq!(d.lines(), expected.as_slice());
            prop_assert_eq!(d.is_empty(), active.iter().all(|l| trusted.contains(l)));
        }

        #[test]
        fn self_diff_is_empty(active in prop::collection::vec(host_line(), 0..20)) {
            let a: HostSet = active.into_iter().collect();
            prop_assert!(diff(&a, &a).is_empty());
        }

        #[test]
        fn parsed_sets_never_hold_blank_lines(content in "[ a-c\t\n]{0,64}") {
            let set = parse_hosts(&content);
            prop_assert!(set.iter().all(|l| !l.trim().is_empty()));
        }
    }
}
