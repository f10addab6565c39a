use std::path::{Path, PathBuf};

/// Name of the generated file, always written to the project directory.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Writes the rendered Dockerfile into `project_dir`, replacing any
/// existing one.
pub fn write_dockerfile(project_dir: &Path, content: &str) -> Result<PathBuf, OutputError> {
    let path = project_dir.join(DOCKERFILE_NAME);
    std::fs::write(&path, content).map_err(|e| OutputError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Dockerfile written");
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write Dockerfile at {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
