//! Error types for the runner binary.

/// Top-level error for the runner.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Scene loading or snapshot encoding failed.
    #[error("host error: {source}")]
    Host {
        /// The underlying host error.
        #[from]
        source: shipwright_host::HostError,
    },

    /// Writing the snapshot failed.
    #[error("failed to write snapshot: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The bake raised warnings and `fail_on_warnings` is set.
    #[error("bake raised {count} warning(s)")]
    Warnings {
        /// Number of warnings.
        count: usize,
    },
}
