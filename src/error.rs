use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested name has no entry in the command table.
    #[error("no command named '{0}' is configured")]
    CommandNotFound(String),

    /// A configured command string could not be tokenized.
    #[error("malformed command string: {0}")]
    MalformedCommand(String),

    #[error("could not find Cargo.toml in '{}' or any parent directory", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to read '{}'", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}'", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
