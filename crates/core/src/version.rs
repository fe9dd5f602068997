//! Loose version parsing and ordering.
//!
//! A version string is split on `.`, `-`, `_` and `+`, and every piece is
//! further split into runs of digits and runs of letters. `2.7.3-amzn-1`
//! becomes `[2, 7, 3, amzn, 1]` and `0.23rc1` becomes `[0, 23, rc, 1]`.
//!
//! Components compare pairwise: numbers numerically, text lexically, and text
//! before numbers at the same position. A version that is a strict prefix of
//! another sorts first, so `"2" < "2.0" < "2.0.1"`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompatError;

const SEPARATORS: &[char] = &['.', '-', '_', '+'];

/// First version line that shipped YARN as a stable release.
const YARN_STABLE: &str = "2";
/// The 0.23 line introduced YARN before 1.x was cut from the 0.20 branch.
const YARN_PREVIEW: &str = "0.23";
const CLASSIC_1X: &str = "1";

/// One parsed piece of a [`Version`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Text(String),
    Number(u64),
}

/// A parsed version. Equality and ordering use the components only; the
/// original text is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    raw: String,
    components: Vec<Component>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Fails with [`CompatError::MissingVersion`] for an empty string and
    /// [`CompatError::InvalidVersion`] when the text is not version-shaped:
    /// empty components, characters other than ASCII letters, digits and the
    /// separators, a leading non-numeric component, or a number that does not
    /// fit in 64 bits.
    pub fn parse(input: &str) -> Result<Self, CompatError> {
        if input.is_empty() {
            return Err(CompatError::MissingVersion);
        }

        let mut components = Vec::new();
        for piece in input.split(SEPARATORS) {
            if piece.is_empty() {
                return Err(CompatError::invalid_version(input, "empty component"));
            }
            let mut rest = piece;
            while let Some(first) = rest.chars().next() {
                let numeric = first.is_ascii_digit();
                if !numeric && !first.is_ascii_alphabetic() {
                    return Err(CompatError::invalid_version(
                        input,
                        format!("unexpected character '{}'", first),
                    ));
                }
                let end = rest
                    .find(|c: char| c.is_ascii_digit() != numeric || !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                let (run, tail) = rest.split_at(end);
                let component = if numeric {
                    let n = run.parse::<u64>().map_err(|_| {
                        CompatError::invalid_version(
                            input,
                            format!("component '{}' is out of range", run),
                        )
                    })?;
                    Component::Number(n)
                } else {
                    Component::Text(run.to_owned())
                };
                components.push(component);
                rest = tail;
            }
        }

        if !matches!(components.first(), Some(Component::Number(_))) {
            return Err(CompatError::invalid_version(
                input,
                "must start with a number",
            ));
        }

        Ok(Version {
            raw: input.to_owned(),
            components,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = CompatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.raw
    }
}

/// Return `true` if `version >= threshold` under loose ordering.
pub fn version_at_least(version: &str, threshold: &str) -> Result<bool, CompatError> {
    Ok(Version::parse(version)? >= Version::parse(threshold)?)
}

/// Does this Hadoop version run on YARN (the next-generation resource manager)?
///
/// True for 2.x and later, and for the 0.23 series where YARN originated.
/// 1.x descends from 0.20 and does not.
pub fn uses_next_generation_runtime(version: &str) -> Result<bool, CompatError> {
    Ok(version_at_least(version, YARN_STABLE)?
        || (version_at_least(version, YARN_PREVIEW)? && !version_at_least(version, CLASSIC_1X)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn parses_dotted_numbers() {
        assert_eq!(
            v("2.7.3").components(),
            &[
                Component::Number(2),
                Component::Number(7),
                Component::Number(3)
            ]
        );
    }

    #[test]
    fn splits_letter_runs_and_vendor_suffixes() {
        assert_eq!(
            v("0.23rc1").components(),
            &[
                Component::Number(0),
                Component::Number(23),
                Component::Text("rc".to_string()),
                Component::Number(1),
            ]
        );
        assert_eq!(v("2.7.3-amzn-1").components().len(), 5);
    }

    #[test]
    fn loose_ordering() {
        assert!(v("1.2") < v("1.2.1"));
        assert!(v("2") < v("2.0.1"));
        assert!(v("2") < v("2.0"));
        assert!(v("0.23") < v("1"));
        assert!(v("1") < v("2"));
        assert!(v("0.9") < v("0.20"));
        assert!(v("2.0.0rc1") > v("2.0.0"));
        assert!(v("2.0.alpha") < v("2.0.1"));
    }

    #[test]
    fn equality_ignores_separator_spelling() {
        assert_eq!(v("2.7.3-amzn"), v("2.7.3.amzn"));
        assert_eq!(v("1.0").to_string(), "1.0");
    }

    #[test]
    fn rejects_malformed_versions() {
        assert_eq!(Version::parse(""), Err(CompatError::MissingVersion));
        for bad in ["abc", ".1", "1..2", "1.2.", "1.2 ", "v1.2", "1/2", "99999999999999999999999"] {
            assert!(
                matches!(Version::parse(bad), Err(CompatError::InvalidVersion { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn serde_uses_the_original_string() {
        let parsed: Version = serde_json::from_str("\"2.7.3\"").unwrap();
        assert_eq!(parsed, v("2.7.3"));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"2.7.3\"");
        assert!(serde_json::from_str::<Version>("\"x\"").is_err());
    }

    #[test]
    fn version_at_least_compares_loosely() {
        assert!(version_at_least("2.0", "2").unwrap());
        assert!(!version_at_least("2", "2.0").unwrap());
        assert!(version_at_least("0.20.205", "0.20").unwrap());
        assert!(version_at_least("1.0", "").is_err());
        assert!(version_at_least("one", "1").is_err());
    }

    #[test]
    fn next_generation_runtime_truth_table() {
        assert!(!uses_next_generation_runtime("0.20.2").unwrap());
        assert!(uses_next_generation_runtime("0.23.0").unwrap());
        assert!(!uses_next_generation_runtime("1.0.3").unwrap());
        assert!(uses_next_generation_runtime("2.0.0").unwrap());
        assert!(uses_next_generation_runtime("3.3.6").unwrap());
        assert!(!uses_next_generation_runtime("0.18").unwrap());
        assert!(uses_next_generation_runtime("junk").is_err());
    }
}
