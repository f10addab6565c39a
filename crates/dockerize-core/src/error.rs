use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Metadata derivation ──
    #[error("failed to resolve the working directory")]
    WorkingDirResolve { source: std::io::Error },

    #[error("working directory {path} is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("cannot derive an entrypoint name from {path}; run dockerize inside the program's directory")]
    NoEntrypoint { path: PathBuf },
}
