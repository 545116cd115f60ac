//! Typed JSON access on top of a [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::traits::KeyValueStore;

/// Reads and writes JSON-serialized values under fixed keys.
///
/// Reads never fail on bad data: a value that does not deserialize is
/// logged and reported as absent, so callers fall back to their defaults.
/// Backend failures still propagate.
#[derive(Debug, Clone, Default)]
pub struct LocalStore<S> {
    inner: S,
    prefix: String,
}

impl<S: KeyValueStore> LocalStore<S> {
    /// Wraps a backend with no key prefix.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            prefix: String::new(),
        }
    }

    /// Namespaces every key with `prefix`.
    pub fn with_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The configured key prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The backend key used for `key`.
    ///
    /// A prefix ending in a letter or digit is joined camelCase
    /// (`oryza` + `phone` is `oryzaPhone`); any other prefix, such as
    /// `shop:`, is joined as is.
    pub fn full_key(&self, key: &str) -> String {
        let camel = self
            .prefix
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let mut chars = key.chars();
        match chars.next() {
            Some(first) if camel => {
                format!("{}{}{}", self.prefix, first.to_ascii_uppercase(), chars.as_str())
            }
            _ => format!("{}{}", self.prefix, key),
        }
    }

    /// Loads and deserializes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or its value is corrupt.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let full_key = self.full_key(key);
        let Some(raw) = self.inner.get(&full_key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %full_key, error = %e, "Ignoring corrupt stored value");
                Ok(None)
            }
        }
    }

    /// Loads the value under `key`, or builds the default.
    pub fn load_or_else<T, F>(&self, key: &str, default: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        Ok(self.load(key)?.unwrap_or_else(default))
    }

    /// Serializes `value` and replaces whatever is stored under `key`.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let full_key = self.full_key(key);
        self.inner.set(&full_key, &json)
    }

    /// Reads a plain string value stored without JSON encoding.
    pub fn get_text(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(&self.full_key(key))
    }

    /// Writes a plain string value without JSON encoding.
    pub fn set_text(&mut self, key: &str, value: &str) -> Result<()> {
        let full_key = self.full_key(key);
        self.inner.set(&full_key, value)
    }

    /// Borrows the backend.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Mutably borrows the backend.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
