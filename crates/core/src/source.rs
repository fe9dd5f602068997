//! Key/value sources that jobconf values can be read from.
//!
//! The [`ConfigSource`] trait abstracts "is this key set, and to what" so
//! alias resolution works the same over the process environment and over an
//! explicit jobconf map. Sources may store keys in a different spelling than
//! the dotted property name; a [`KeyTransform`] maps one to the other per call.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Read-only key/value lookup.
pub trait ConfigSource {
    /// The value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Hadoop streaming exports jobconf to tasks with dots replaced by
/// underscores (`map.input.file` becomes `map_input_file`), so pair this
/// source with [`KeyTransform::ENV`].
///
/// A variable whose value is not valid UTF-8 reads as unset, so resolution
/// moves on to the next alias or the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).and_then(|value| value.into_string().ok())
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// How a dotted property name is spelled as a key in a source.
#[derive(Debug, Clone, Copy, Default)]
pub enum KeyTransform {
    /// Keys are the property names themselves.
    #[default]
    Identity,
    /// Every `.` is replaced by the given separator.
    ReplaceDots(char),
    /// Any other pure mapping.
    Custom(fn(&str) -> String),
}

impl KeyTransform {
    /// Dots to underscores, as used for environment variables.
    pub const ENV: KeyTransform = KeyTransform::ReplaceDots('_');

    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            KeyTransform::Identity => Cow::Borrowed(name),
            KeyTransform::ReplaceDots(sep) => {
                if name.contains('.') {
                    Cow::Owned(name.replace('.', sep.encode_utf8(&mut [0; 4])))
                } else {
                    Cow::Borrowed(name)
                }
            }
            KeyTransform::Custom(f) => Cow::Owned(f(name)),
        }
    }
}
