use thiserror::Error;

/// Errors produced while setting up or driving the indicator.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("command failed: {0}")]
    Command(String),

    #[error("yandex-disk daemon is not set up: {0}")]
    DaemonNotFound(String),
}
