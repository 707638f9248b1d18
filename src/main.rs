pub mod alias;
pub mod annotate;
pub mod batch;
pub mod cli;
pub mod error;
pub mod merge;
pub mod name;
pub mod registry;
pub mod sample;
pub mod settings;

use crate::registry::SourceRegistry;
use crate::sample::Sample;

/// Sample sources for this project's own custom-type modules.
///
/// Each entry pairs a module key (the target file path with separators
/// dotted and the extension stripped) with the ordered samples that module
/// exposes. The message table is the canonical example: a nested dict
/// whose leaf values are user-facing strings.
fn default_registry() -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.register("config.messages_custom_type", || {
        let messages = Sample::dict([
            (
                "common",
                Sample::dict([
                    (
                        "success",
                        Sample::dict([("response_ok", "ok.".into())]),
                    ),
                    (
                        "error",
                        Sample::dict([
                            ("unauthorized", "login required.".into()),
                            ("update_failure", "update failed.".into()),
                        ]),
                    ),
                ]),
            ),
            (
                "category",
                Sample::dict([(
                    "error",
                    Sample::dict([
                        (
                            "update",
                            Sample::dict([
                                ("invalid_uuid", "category id must be a UUID.".into()),
                                ("not_found", "category to update was not found.".into()),
                            ]),
                        ),
                        (
                            "delete",
                            Sample::dict([
                                ("invalid_uuid", "category id must be a UUID.".into()),
                                ("not_found", "category to delete was not found.".into()),
                            ]),
                        ),
                    ]),
                )]),
            ),
        ]);
        vec![("messages".to_string(), messages)]
    });
    registry
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run(&default_registry())
}
