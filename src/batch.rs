//! Directory-tree regeneration.
//!
//! Walks a root for files following the `*_custom_type.py` naming
//! convention and regenerates each one, strictly sequentially. There is no
//! rollback: a failing file is reported and the walk moves on.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::{GenError, Result};
use crate::merge::regenerate_type_file;
use crate::registry::SourceRegistry;

/// Files participating in type generation end with this suffix.
pub const TYPE_FILE_SUFFIX: &str = "_custom_type.py";

/// Regenerate every matching file under `base` (or `base/start`).
///
/// Registry keys are derived from each file's path relative to `base`, so
/// `base` must be the project root the providers were registered against.
/// Returns the relative paths that regenerated successfully.
pub fn regenerate_tree(
    base: &Path,
    start: Option<&Path>,
    registry: &SourceRegistry,
) -> Result<Vec<PathBuf>> {
    let root = match start {
        Some(sub) => base.join(sub),
        None => base.to_path_buf(),
    };
    let pattern = format!("{}/**/*{}", root.display(), TYPE_FILE_SUFFIX);

    let mut processed = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|err| GenError::Io(err.into_error()))?;
        let relative = path.strip_prefix(base).unwrap_or(&path).to_path_buf();

        println!("{}", relative.display());
        match regenerate_type_file(&path, &relative, registry) {
            Ok(()) => {
                tracing::debug!(path = %relative.display(), "regenerated");
                processed.push(relative);
            }
            Err(error) => {
                tracing::error!(path = %relative.display(), %error, "regeneration failed");
                eprintln!("{} {}: {error}", "failed".red().bold(), relative.display());
            }
        }
    }
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    fn fruits_registry(keys: &[&str]) -> SourceRegistry {
        let mut registry = SourceRegistry::new();
        for key in keys {
            registry.register(*key, || {
                vec![(
                    "fruits".to_string(),
                    Sample::list(["apple".into(), "banana".into()]),
                )]
            });
        }
        registry
    }

    #[test]
    fn only_files_matching_the_suffix_are_touched() {
        let dir = tempfile::tempdir().unwrap();
        let input = "fruits = [\"apple\", \"banana\"]\n";
        std::fs::write(dir.path().join("no_argument_custom_type.py"), input).unwrap();
        std::fs::write(dir.path().join("exclude.py"), input).unwrap();

        let registry = fruits_registry(&["no_argument_custom_type", "exclude"]);
        let processed = regenerate_tree(dir.path(), None, &registry).unwrap();

        assert_eq!(processed, vec![PathBuf::from("no_argument_custom_type.py")]);
        let touched =
            std::fs::read_to_string(dir.path().join("no_argument_custom_type.py")).unwrap();
        assert!(touched.contains("# TYPE DEF HERE"));
        assert!(touched.contains("TypeFruits = List[str]"));
        // the non-matching file round-trips untouched
        let untouched = std::fs::read_to_string(dir.path().join("exclude.py")).unwrap();
        assert_eq!(untouched, input);
    }

    #[test]
    fn start_path_narrows_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("child")).unwrap();
        let input = "fruits = [\"apple\", \"banana\"]\n";
        std::fs::write(dir.path().join("parent_custom_type.py"), input).unwrap();
        std::fs::write(dir.path().join("child/child_custom_type.py"), input).unwrap();

        let registry =
            fruits_registry(&["parent_custom_type", "child.child_custom_type"]);
        let processed =
            regenerate_tree(dir.path(), Some(Path::new("child")), &registry).unwrap();

        assert_eq!(processed, vec![PathBuf::from("child/child_custom_type.py")]);
        let parent = std::fs::read_to_string(dir.path().join("parent_custom_type.py")).unwrap();
        assert_eq!(parent, input);
    }

    #[test]
    fn a_failing_file_does_not_stop_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        let input = "fruits = [\"apple\", \"banana\"]\n";
        // sorts before the registered file and has no provider
        std::fs::write(dir.path().join("a_orphan_custom_type.py"), input).unwrap();
        std::fs::write(dir.path().join("b_fruits_custom_type.py"), input).unwrap();

        let registry = fruits_registry(&["b_fruits_custom_type"]);
        let processed = regenerate_tree(dir.path(), None, &registry).unwrap();

        assert_eq!(processed, vec![PathBuf::from("b_fruits_custom_type.py")]);
        // the orphan is reported but left as it was
        let orphan = std::fs::read_to_string(dir.path().join("a_orphan_custom_type.py")).unwrap();
        assert_eq!(orphan, input);
    }
}
