//! Host-side cross-compilation for scratch images.
//!
//! A scratch image has no libc, so the binary must be built for Linux with
//! cgo disabled. The target OS and cgo switch are passed to the child
//! process only; the parent's environment is left untouched.

use dockerize_core::{BuildConfig, BuildMetadata};
use std::path::{Path, PathBuf};

/// A single toolchain invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Environment overrides applied to the child process only.
    pub env: Vec<(String, String)>,
    pub current_dir: PathBuf,
}

impl Invocation {
    /// `go build -o <entrypoint>` targeting `config.target_os` without cgo.
    pub fn cross_compile(config: &BuildConfig, meta: &BuildMetadata, project_dir: &Path) -> Self {
        Self {
            program: config.toolchain.clone(),
            args: vec!["build".to_owned(), "-o".to_owned(), meta.entrypoint.clone()],
            env: vec![
                ("GOOS".to_owned(), config.target_os.clone()),
                ("CGO_ENABLED".to_owned(), "0".to_owned()),
            ],
            current_dir: project_dir.to_path_buf(),
        }
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Abstraction over toolchain execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait ToolchainExecutor: Send + Sync {
    /// Run the invocation to completion.
    ///
    /// Standard output is streamed to the terminal; standard error is
    /// captured and returned in [`ToolchainError::BuildFailed`] on a
    /// non-zero exit.
    async fn run(&self, invocation: &Invocation) -> Result<(), ToolchainError>;
}

/// Real subprocess executor.
pub struct RealExecutor;

impl ToolchainExecutor for RealExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<(), ToolchainError> {
        use std::process::Stdio;

        // `output()` would re-pipe stdout; spawn keeps it inherited.
        let child = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .current_dir(&invocation.current_dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ToolchainError::Spawn {
                program: invocation.program.clone(),
                source: e,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ToolchainError::Wait {
                program: invocation.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ToolchainError::BuildFailed {
                command: invocation.display(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Cross-compile the program in `project_dir` into a binary named after
/// the entrypoint.
pub async fn cross_compile<E: ToolchainExecutor>(
    executor: &E,
    config: &BuildConfig,
    meta: &BuildMetadata,
    project_dir: &Path,
) -> Result<PathBuf, ToolchainError> {
    let invocation = Invocation::cross_compile(config, meta, project_dir);
    tracing::info!(
        command = %invocation.display(),
        target_os = %config.target_os,
        "cross-compiling for scratch image"
    );

    executor.run(&invocation).await?;

    Ok(project_dir.join(&meta.entrypoint))
}

#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed waiting for {program}")]
    Wait {
        program: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed ({}):\n{stderr}", format_code(*code))]
    BuildFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn format_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_owned(),
    }
}
