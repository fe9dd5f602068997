//! Jobconf lookups over the built-in alias table.
//!
//! These are the entry points jobs and runners call. Each one delegates to
//! the process-wide [`AliasIndex`](crate::index::AliasIndex).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::CompatError;
use crate::index::{alias_index, AliasIndex};
use crate::source::{ConfigSource, EnvSource, KeyTransform};

/// Read `name` from `source`, trying every alias of it, or return `default`.
pub fn resolve_from_source<S>(
    name: &str,
    source: &S,
    transform: KeyTransform,
    default: Option<&str>,
) -> Option<String>
where
    S: ConfigSource + ?Sized,
{
    alias_index()
        .resolve(name, source, transform)
        .or_else(|| default.map(str::to_owned))
}

/// Get a jobconf value from the task's environment.
///
/// A mapper can ask for `jobconf_from_env("map.input.file", None)` and get
/// the input file whether the cluster exported `map_input_file` or
/// `mapreduce_map_input_file`.
pub fn jobconf_from_env(name: &str, default: Option<&str>) -> Option<String> {
    resolve_from_source(name, &EnvSource, KeyTransform::ENV, default)
}

/// Get a jobconf value from an explicit jobconf map, trying every alias.
pub fn jobconf_from_map<S>(jobconf: &S, name: &str, default: Option<&str>) -> Option<String>
where
    S: ConfigSource + ?Sized,
{
    resolve_from_source(name, jobconf, KeyTransform::Identity, default)
}

/// Translate `name` to the form Hadoop `version` expects.
///
/// Names that are not in the alias table come back unchanged.
pub fn translate<'a>(name: &'a str, version: &str) -> Result<&'a str, CompatError> {
    alias_index().translate(name, version)
}

/// Every known spelling of `name`, including `name` itself, sorted.
pub fn all_aliases(name: &str) -> BTreeSet<&str> {
    alias_index().all_aliases(name)
}

/// A jobconf after [`translate_mapping`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslatedJobconf {
    /// The input entries plus every alias-derived entry.
    pub jobconf: BTreeMap<String, String>,
    /// `original -> translated` for keys renamed for a target version.
    /// Always empty when no version was given.
    pub renamed: BTreeMap<String, String>,
}

/// Add translated keys to a jobconf, see [`AliasIndex::translate_mapping`].
pub fn translate_mapping(
    jobconf: &BTreeMap<String, String>,
    target_version: Option<&str>,
) -> Result<TranslatedJobconf, CompatError> {
    alias_index().translate_mapping(jobconf, target_version)
}

impl AliasIndex<'_> {
    /// Combine `jobconf` with its translated keys.
    ///
    /// With a target version each key gains its name for that version;
    /// without one it gains every known alias. Entries already in the input
    /// are never overwritten. When keys are renamed for a target version a
    /// single warning lists them.
    pub fn translate_mapping(
        &self,
        jobconf: &BTreeMap<String, String>,
        target_version: Option<&str>,
    ) -> Result<TranslatedJobconf, CompatError> {
        let mut translated = TranslatedJobconf {
            jobconf: jobconf.clone(),
            renamed: BTreeMap::new(),
        };

        for (key, value) in jobconf {
            let variants = match target_version {
                Some(version) => BTreeSet::from([self.translate(key, version)?]),
                None => self.all_aliases(key),
            };

            for variant in variants {
                // covers variant == key too
                if jobconf.contains_key(variant) {
                    continue;
                }
                translated
                    .jobconf
                    .insert(variant.to_owned(), value.clone());
                if target_version.is_some() {
                    translated.renamed.insert(key.clone(), variant.to_owned());
                }
            }
        }

        if let (Some(version), false) = (target_version, translated.renamed.is_empty()) {
            let pairs = translated
                .renamed
                .iter()
                .map(|(from, to)| format!("{} -> {}", from, to))
                .collect::<Vec<_>>()
                .join("\n");
            tracing::warn!(
                hadoop_version = version,
                renamed = translated.renamed.len(),
                "jobconf property names do not match hadoop version {}, translated as follows:\n{}",
                version,
                pairs
            );
        }

        Ok(translated)
    }
}
