//! Typed accessor generation for process-wide settings.
//!
//! Unlike the general strategy, this one owns the whole file: there is no
//! preserved prefix, and every run overwrites import + type alias +
//! literal dictionary + accessor function wholesale.

use indexmap::IndexMap;

use crate::alias::dict_alias;
use crate::error::{GenError, Result};
use crate::merge::{MergeStrategy, TYPING_IMPORT_LINE};
use crate::sample::Sample;

/// Where the generated settings accessor lives.
pub const SETTINGS_FILE_PATH: &str = "./config/settings_handler.py";

const SETTINGS_TYPE_HINT: &str = "setting";

/// Generates `TypeSetting`, the `setting_dict` literal, and the accessor.
#[derive(Debug)]
pub struct SettingsTypeStrategy {
    settings: IndexMap<String, Sample>,
}

impl SettingsTypeStrategy {
    /// Build from a settings document.
    ///
    /// Mirrors an attribute listing: only upper-case-initial, non-dunder
    /// names participate, in sorted order.
    pub fn new(document: IndexMap<String, Sample>) -> Self {
        let mut entries: Vec<(String, Sample)> = document
            .into_iter()
            .filter(|(name, _)| {
                !name.starts_with("__")
                    && name.chars().next().is_some_and(char::is_uppercase)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            settings: entries.into_iter().collect(),
        }
    }

    /// Parse a JSON settings document, reporting the JSON path on failure.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(source);
        let document: serde_json::Value =
            serde_path_to_error::deserialize(de).map_err(|err| GenError::SettingsParse {
                path: err.path().to_string(),
                message: err.into_inner().to_string(),
            })?;
        match Sample::from(document) {
            Sample::Dict(map) => Ok(Self::new(map)),
            _ => Err(GenError::SettingsNotObject),
        }
    }

    /// The `setting_dict` assignment reproducing every collected value.
    fn literal_dict_text(&self) -> String {
        let entries = self
            .settings
            .iter()
            .map(|(name, value)| format!("    \"{name}\": {},", value.py_literal()))
            .collect::<Vec<_>>();
        format!("setting_dict: TypeSetting = {{\n{}\n}}", entries.join("\n"))
    }
}

impl MergeStrategy for SettingsTypeStrategy {
    // no prefix concept: prior content is discarded
    fn read(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, out: &mut String) -> Result<()> {
        out.push_str(TYPING_IMPORT_LINE);
        out.push('\n');

        out.push_str(&dict_alias(&self.settings, SETTINGS_TYPE_HINT));
        out.push('\n');

        out.push_str(&self.literal_dict_text());
        out.push('\n');
        out.push('\n');

        out.push_str("def get_setting_dict() -> TypeSetting:\n");
        out.push_str("    return setting_dict");
        Ok(())
    }
}
