//! "From this version onward" lookups.
//!
//! A [`VersionMap`] lists the versions where a value changed, each paired with
//! the value that applies from that version on. Looking up a version picks
//! the value of the greatest threshold at or below it. Versions older than
//! every threshold get the earliest value.

use crate::error::CompatError;
use crate::version::Version;

/// Thresholds sorted ascending by version. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMap<T> {
    entries: Vec<(Version, T)>,
}

impl<T> VersionMap<T> {
    /// Build from pairs that are already in ascending version order.
    ///
    /// Equal thresholds are allowed; the later one wins on lookup.
    pub fn from_sorted(entries: Vec<(Version, T)>) -> Result<Self, CompatError> {
        if entries.is_empty() {
            return Err(CompatError::EmptyVersionMap);
        }
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 > pair[1].0) {
            return Err(CompatError::UnsortedVersionMap {
                previous: pair[0].0.to_string(),
                next: pair[1].0.to_string(),
            });
        }
        Ok(VersionMap { entries })
    }

    /// Build from `(version string, value)` pairs in any order.
    ///
    /// Pairs are parsed and stably sorted by version.
    pub fn from_unsorted<K, I>(mapping: I) -> Result<Self, CompatError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries = mapping
            .into_iter()
            .map(|(version, value)| Ok((Version::parse(version.as_ref())?, value)))
            .collect::<Result<Vec<_>, CompatError>>()?;
        if entries.is_empty() {
            return Err(CompatError::EmptyVersionMap);
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(VersionMap { entries })
    }

    /// The value in effect at `version`.
    pub fn value_for(&self, version: &Version) -> &T {
        self.entries
            .iter()
            .rev()
            .find(|(threshold, _)| version >= threshold)
            .map(|(_, value)| value)
            // below every threshold: clamp to the earliest value
            .unwrap_or(&self.entries[0].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Version, &T)> {
        self.entries.iter().map(|(version, value)| (version, value))
    }
}

/// Look up the value in effect at `version`, parsing the version first.
pub fn value_for_version<'m, T>(
    map: &'m VersionMap<T>,
    version: &str,
) -> Result<&'m T, CompatError> {
    let version = Version::parse(version)?;
    Ok(map.value_for(&version))
}
