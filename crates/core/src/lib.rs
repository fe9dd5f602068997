//! jobcompat-core: Hadoop jobconf names across version lines.
//!
//! Hadoop 0.21 renamed most job configuration properties, and the 1.x and
//! 2.x lines inherited the two naming schemes. This crate lets callers ask
//! for a property by any of its names and get the right answer whichever
//! scheme the running cluster uses.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`AliasGroup`] / [`alias_groups()`] -- the static alias table
//! - [`AliasIndex`] / [`build_index()`] / [`alias_index()`] -- name lookups
//! - [`Version`] / [`VersionMap`] -- loose versions and threshold tables
//! - [`ConfigSource`] / [`KeyTransform`] -- where values are read from
//! - [`CompatError`] -- invalid-argument errors
//!
//! Lookup entry points: [`jobconf_from_env()`], [`jobconf_from_map()`],
//! [`resolve_from_source()`], [`translate()`], [`all_aliases()`],
//! [`translate_mapping()`], [`value_for_version()`], [`version_at_least()`]
//! and [`uses_next_generation_runtime()`].

pub mod error;
pub mod index;
pub mod lookup;
pub mod source;
pub mod table;
pub mod version;
pub mod version_map;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::CompatError;
pub use index::AliasIndex;
pub use lookup::TranslatedJobconf;
pub use source::{ConfigSource, EnvSource, KeyTransform};
pub use table::{AliasGroup, CURRENT_LINES, JOBCONF_ALIASES, LEGACY_LINES};
pub use version::{Component, Version};
pub use version_map::VersionMap;

// ── Convenience re-exports: entry points ─────────────────────────────

pub use index::{alias_index, build_index};
pub use lookup::{
    all_aliases, jobconf_from_env, jobconf_from_map, resolve_from_source, translate,
    translate_mapping,
};
pub use table::alias_groups;
pub use version::{uses_next_generation_runtime, version_at_least};
pub use version_map::value_for_version;
