/// All errors returned by version-aware jobconf operations.
///
/// Every variant is an invalid-argument condition: lookups over the alias
/// table itself never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompatError {
    /// A version-aware operation was called without a version.
    #[error("a hadoop version is required")]
    MissingVersion,

    /// The string is not shaped like a version (e.g. `"2.7.3"`, `"0.23rc1"`).
    #[error("invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    /// A version map was built with no thresholds.
    #[error("version map is empty")]
    EmptyVersionMap,

    /// Pre-sorted thresholds were passed out of ascending order.
    #[error("version map is not sorted: '{previous}' is listed before '{next}'")]
    UnsortedVersionMap { previous: String, next: String },
}

impl CompatError {
    pub(crate) fn invalid_version(input: &str, reason: impl Into<String>) -> Self {
        CompatError::InvalidVersion {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
