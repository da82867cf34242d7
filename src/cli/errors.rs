use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load parameter preset {path}: {source}")]
    Preset {
        path: String,
        #[source]
        source: colorcloud::Error,
    },
}
