//! Name → alias group index.
//!
//! Every name that appears in any group points back at that group, so
//! "all aliases of X" and "X under version V" are single hash lookups.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::error::CompatError;
use crate::source::{ConfigSource, KeyTransform};
use crate::table::{alias_groups, AliasGroup};
use crate::version::Version;

/// A lookup index over a slice of alias groups.
#[derive(Debug, Clone)]
pub struct AliasIndex<'g> {
    by_name: HashMap<&'static str, &'g AliasGroup>,
}

/// Index every name of every group.
///
/// A name listed by more than one group maps to the last of them.
pub fn build_index(groups: &[AliasGroup]) -> AliasIndex<'_> {
    let mut by_name = HashMap::new();
    for group in groups {
        for name in group.names() {
            by_name.insert(name, group);
        }
    }
    tracing::debug!(
        groups = groups.len(),
        names = by_name.len(),
        "built jobconf alias index"
    );
    AliasIndex { by_name }
}

static ALIAS_INDEX: LazyLock<AliasIndex<'static>> = LazyLock::new(|| build_index(alias_groups()));

/// The process-wide index over the built-in alias table.
pub fn alias_index() -> &'static AliasIndex<'static> {
    &ALIAS_INDEX
}

impl<'g> AliasIndex<'g> {
    pub fn group_of(&self, name: &str) -> Option<&'g AliasGroup> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// `name` plus every alias of it, deduplicated and sorted.
    pub fn all_aliases<'a>(&self, name: &'a str) -> BTreeSet<&'a str> {
        let mut aliases = BTreeSet::from([name]);
        if let Some(group) = self.group_of(name) {
            for alias in group.names() {
                aliases.insert(alias);
            }
        }
        aliases
    }

    /// The name `name` takes under `version`. Unknown names pass through.
    pub fn translate<'a>(&self, name: &'a str, version: &str) -> Result<&'a str, CompatError> {
        let version = Version::parse(version)?;
        match self.group_of(name) {
            Some(group) => Ok(*group.version_map()?.value_for(&version)),
            None => Ok(name),
        }
    }

    /// Read `name` from `source`, falling back to its aliases.
    ///
    /// The name as given is always tried first. Aliases are then tried in
    /// version-line label order; callers should not depend on which alias
    /// wins when several are set.
    pub fn resolve<S>(&self, name: &str, source: &S, transform: KeyTransform) -> Option<String>
    where
        S: ConfigSource + ?Sized,
    {
        if let Some(value) = source.lookup(&transform.apply(name)) {
            return Some(value);
        }
        self.group_of(name)?
            .names()
            .find_map(|alias| source.lookup(&transform.apply(alias)))
    }
}
