//! Dockerfile rendering and host cross-compilation for dockerize.
//!
//! # Pipeline
//!
//! ```text
//! dockerize [--scratch]
//!   1. Metadata   ── BuildMetadata::from_current_dir()
//!   2. Build      ── go build -o <entrypoint>   (scratch only, GOOS=linux CGO_ENABLED=0)
//!   3. Render     ── DockerfileGenerator::render()
//!   4. Write      ── ./Dockerfile
//! ```
//!
//! # Templates
//!
//! - **Standard**: builds inside the Go toolchain image, statically linked,
//!   installed under `/opt/app`
//! - **Scratch**: `FROM scratch` plus the prebuilt binary at `/`

pub mod dockerfile;
pub mod output;
pub mod toolchain;

pub use dockerfile::{BuildMode, DockerfileGenerator};
pub use output::write_dockerfile;
pub use toolchain::{RealExecutor, ToolchainError, ToolchainExecutor, cross_compile};
