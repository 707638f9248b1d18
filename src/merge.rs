//! Two-phase file regeneration.
//!
//! Everything before the marker line is the module's own content and is
//! preserved verbatim (modulo line-terminator normalization); everything
//! from the marker on is generated fresh on every run. Re-running the
//! generator against its own output reproduces it byte for byte.

use std::path::{Path, PathBuf};

use crate::alias::{dict_alias, sequence_alias};
use crate::error::Result;
use crate::registry::{module_key, NamedSamples, SourceRegistry};
use crate::sample::Sample;

// ------------------------------- Layout ----------------------------------- //

/// Sentinel separating preserved module content from generated declarations.
pub const TYPE_DEF_MARKER: &str = "# TYPE DEF HERE\n";

/// Import header the generated declarations depend on.
pub const TYPING_IMPORT_LINE: &str = "from typing import TypedDict, List, Tuple, Any\n";

// Re-running against generated output must not stack import lines.
const TYPING_IMPORT_HINT: &str = "from typing";

// ------------------------------ Strategies -------------------------------- //

/// One generation pass over a target file.
///
/// The runner invokes `read` only when the file already exists, then
/// `write` unconditionally, in registration order. Multiple strategies may
/// share one file; in practice each file has exactly one.
pub trait MergeStrategy {
    fn read(&mut self, text: &str) -> Result<()>;
    fn write(&mut self, out: &mut String) -> Result<()>;
}

/// Two-phase runner: optional read, then a single truncating write.
pub struct TypeFileGenerator<'a> {
    path: PathBuf,
    strategies: Vec<Box<dyn MergeStrategy + 'a>>,
}

impl<'a> TypeFileGenerator<'a> {
    pub fn new(path: impl Into<PathBuf>, strategies: Vec<Box<dyn MergeStrategy + 'a>>) -> Self {
        Self {
            path: path.into(),
            strategies,
        }
    }

    pub fn generate(&mut self) -> Result<()> {
        if self.path.exists() {
            let text = std::fs::read_to_string(&self.path)?;
            for strategy in &mut self.strategies {
                strategy.read(&text)?;
            }
        }

        let mut out = String::new();
        for strategy in &mut self.strategies {
            strategy.write(&mut out)?;
        }

        tracing::debug!(path = %self.path.display(), bytes = out.len(), "writing type file");
        std::fs::write(&self.path, out)?;
        Ok(())
    }
}

// --------------------------- TypeDefStrategy ------------------------------ //

/// General-purpose strategy: preserve the module prefix, regenerate the
/// declaration block from the module's registered samples.
pub struct TypeDefStrategy<'a> {
    registry: &'a SourceRegistry,
    module: String,
    prefix_lines: Vec<String>,
    samples: Option<NamedSamples>,
}

impl<'a> TypeDefStrategy<'a> {
    pub fn new(registry: &'a SourceRegistry, module: impl Into<String>) -> Self {
        Self {
            registry,
            module: module.into(),
            prefix_lines: Vec::new(),
            samples: None,
        }
    }

    // Samples resolve lazily so a fresh write (no read phase) still gets them.
    fn load_samples(&mut self) -> Result<()> {
        if self.samples.is_none() {
            self.samples = Some(self.registry.named_samples(&self.module)?);
        }
        Ok(())
    }

    fn has_typing_import(&self) -> bool {
        self.prefix_lines
            .iter()
            .any(|line| line.contains(TYPING_IMPORT_HINT))
    }

    /// Declaration text for one sample, named by its declared name.
    ///
    /// Mappings expand to their full hoisted declaration set. A sequence of
    /// mappings needs a record declaration too, but its elements are
    /// anonymous; the joined field keys of the first element make a name
    /// that is unlikely to collide with anything hand-written.
    fn declaration_text(name: &str, sample: &Sample) -> String {
        match sample {
            Sample::Dict(dict) => dict_alias(dict, name),
            Sample::List(items) | Sample::Tuple(items) => {
                if let Some(Sample::Dict(first)) = items.first() {
                    let joined = first
                        .keys()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join("_");
                    format!(
                        "{}{}",
                        dict_alias(first, &joined),
                        sequence_alias(sample, name, &joined)
                    )
                } else {
                    sequence_alias(sample, name, "")
                }
            }
            // primitives and None need no alias
            _ => String::new(),
        }
    }
}

impl MergeStrategy for TypeDefStrategy<'_> {
    fn read(&mut self, text: &str) -> Result<()> {
        self.load_samples()?;

        for line in text.split_inclusive('\n') {
            if line == TYPE_DEF_MARKER {
                break;
            }
            let mut line = line.to_string();
            // a final line without a terminator must round-trip like the rest
            if !line.ends_with('\n') {
                line.push('\n');
            }
            self.prefix_lines.push(line);
        }
        Ok(())
    }

    fn write(&mut self, out: &mut String) -> Result<()> {
        self.load_samples()?;

        if !self.has_typing_import() {
            out.push_str(TYPING_IMPORT_LINE);
            out.push('\n');
        }

        for line in &self.prefix_lines {
            out.push_str(line);
        }

        // exactly one blank line between module content and the marker
        if let Some(last) = self.prefix_lines.last() {
            if last != "\n" {
                out.push('\n');
            }
        }
        out.push_str(TYPE_DEF_MARKER);

        let samples = self.samples.take().unwrap_or_default();
        let last_index = samples.len().saturating_sub(1);
        for (index, (name, sample)) in samples.iter().enumerate() {
            let declaration = Self::declaration_text(name, sample);
            if index == last_index {
                // no dangling blank line at end of file
                out.push_str(declaration.strip_suffix('\n').unwrap_or(&declaration));
            } else {
                out.push_str(&declaration);
            }
        }
        Ok(())
    }
}

// ----------------------------- Convenience -------------------------------- //

/// Regenerate one target file.
///
/// `module_path` is the project-relative path the registry key is derived
/// from; `path` is where the file actually lives (they differ only when
/// the caller works from outside the project root).
pub fn regenerate_type_file(
    path: &Path,
    module_path: &Path,
    registry: &SourceRegistry,
) -> Result<()> {
    let strategy = TypeDefStrategy::new(registry, module_key(module_path));
    TypeFileGenerator::new(path, vec![Box::new(strategy)]).generate()
}

// -------------------------------- Tests ----------------------------------- //
