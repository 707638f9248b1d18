//! Sample sources, keyed by module path.
//!
//! The original values live in the target modules themselves; a compiled
//! generator cannot import them back, so each target module registers an
//! in-process provider returning its `(name, value)` pairs. The pairs are
//! ordered, and the names double as the declaration names, so they must be
//! plain identifiers.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GenError, Result};
use crate::sample::Sample;

/// Ordered `(declaration name, sample value)` pairs from one target module.
pub type NamedSamples = Vec<(String, Sample)>;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Module key → sample provider lookup table.
#[derive(Default)]
pub struct SourceRegistry {
    providers: BTreeMap<String, Box<dyn Fn() -> NamedSamples>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, key: impl Into<String>, provider: F)
    where
        F: Fn() -> NamedSamples + 'static,
    {
        self.providers.insert(key.into(), Box::new(provider));
    }

    /// Resolve a module's samples, validating the declared names.
    ///
    /// A missing registration means the module does not participate in
    /// type generation at all, which is a caller error, not a skip.
    pub fn named_samples(&self, key: &str) -> Result<NamedSamples> {
        let provider = self
            .providers
            .get(key)
            .ok_or_else(|| GenError::UnknownModule(key.to_string()))?;
        let samples = provider();
        for (name, _) in &samples {
            if !IDENTIFIER.is_match(name) {
                return Err(GenError::BadSampleName {
                    module: key.to_string(),
                    name: name.clone(),
                });
            }
        }
        Ok(samples)
    }
}

/// Registry key for a target file path.
///
/// ```text
/// ./config/messages_custom_type.py -> config.messages_custom_type
/// ```
pub fn module_key(path: &Path) -> String {
    let text = path.to_string_lossy();
    let text = text.strip_prefix("./").unwrap_or(&text);
    let text = text.strip_suffix(".py").unwrap_or(text);
    text.replace(['/', '\\'], ".")
}
