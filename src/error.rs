use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

/// Failures surfaced by the generation pipeline.
///
/// A missing sample source or a malformed sample name is a configuration
/// error on the caller's side and is never retried or silently skipped.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("no sample source registered for module `{0}`")]
    UnknownModule(String),

    #[error("sample name `{name}` from module `{module}` is not a plain identifier")]
    BadSampleName { module: String, name: String },

    #[error("settings document is not a JSON object")]
    SettingsNotObject,

    #[error("failed to parse settings document at JSON path {path}: {message}")]
    SettingsParse { path: String, message: String },

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
