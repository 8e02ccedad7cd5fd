//! Version arithmetic for release and snapshot versions.
//!
//! Maven versions here are expected to be semver-shaped (`1.2.3`,
//! `1.2.4-SNAPSHOT`). Parsing is lenient about a leading `v` or `=` the way
//! git tags are usually written.

use semver::{BuildMetadata, Prerelease, Version};

use mvnrel_util::errors::ReleaseError;

/// Marker Maven uses for unreleased versions.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Parse a version, ignoring surrounding whitespace and a leading `v`/`=`.
pub fn parse(version: &str) -> Option<Version> {
    let trimmed = version.trim().trim_start_matches(['v', '=']);
    Version::parse(trimmed).ok()
}

/// Whether `version` is a valid semantic version.
pub fn is_valid(version: &str) -> bool {
    parse(version).is_some()
}

/// Whether `version` is a development (snapshot) version.
pub fn is_snapshot(version: &str) -> bool {
    version.contains(SNAPSHOT_MARKER)
}

/// The next patch release after `version`, or `None` if it doesn't parse or
/// the patch number is already at its maximum.
///
/// A pre-release is completed rather than skipped: `1.0.1-SNAPSHOT` becomes
/// `1.0.1`, while `1.0.0` becomes `1.0.1`.
pub fn next_patch(version: &str) -> Option<String> {
    let mut v = parse(version)?;
    if v.pre.is_empty() {
        v.patch = v.patch.checked_add(1)?;
    }
    v.pre = Prerelease::EMPTY;
    v.build = BuildMetadata::EMPTY;
    Some(v.to_string())
}

/// Whether the pom version is close enough to the last released version.
///
/// True when both land on the same next patch release (so `1.0.0` and
/// `1.0.1-SNAPSHOT` agree), or when the pom already carries exactly that next
/// patch release (`1.0.1` after `1.0.0`).
pub fn within_one_patch(last_release: &str, pom_version: &str) -> bool {
    let expected = next_patch(last_release);
    if expected == next_patch(pom_version) {
        return true;
    }
    match (expected, parse(pom_version)) {
        (Some(expected), Some(pom)) => pom.to_string() == expected,
        _ => false,
    }
}

/// Whether `version` is strictly greater than `other`. Unparsable input is never ahead.
pub fn is_ahead_of(version: &str, other: &str) -> bool {
    match (parse(version), parse(other)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// The development version that follows a release: `1.2.3` → `1.2.4-SNAPSHOT`.
pub fn next_snapshot_version(released: &str) -> miette::Result<String> {
    let v = parse(released).ok_or_else(|| ReleaseError::Version {
        message: format!("cannot compute the next snapshot of `{released}`: not a MAJOR.MINOR.PATCH version"),
    })?;
    let patch = v.patch.checked_add(1).ok_or_else(|| ReleaseError::Version {
        message: format!("cannot compute the next snapshot of `{released}`: patch number overflows"),
    })?;
    Ok(format!("{}.{}.{patch}-{SNAPSHOT_MARKER}", v.major, v.minor))
}
