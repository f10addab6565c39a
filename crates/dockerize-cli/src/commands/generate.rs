use dockerize_build::dockerfile::{BuildMode, DockerfileGenerator};
use dockerize_build::output::write_dockerfile;
use dockerize_build::toolchain::{RealExecutor, cross_compile};
use dockerize_core::{BuildMetadata, DockerizeConfig};
use std::path::PathBuf;

/// Derive metadata, cross-compile when building from scratch, and write
/// `./Dockerfile`.
pub async fn generate(expose: Option<String>, mode: BuildMode) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = DockerizeConfig::load(&project_dir)?;

    let expose = match expose {
        Some(port) => port,
        None => config.project.expose.clone(),
    };
    let meta = BuildMetadata::from_current_dir(&config.project.root_env, expose)?;

    // The scratch image only ADDs the binary, so it must exist before the
    // Dockerfile is written.
    if mode == BuildMode::Scratch {
        let binary = cross_compile(&RealExecutor, &config.build, &meta, &project_dir).await?;
        tracing::debug!(binary = %binary.display(), "cross-compiled binary ready");
    }

    let generator = DockerfileGenerator::new(&config.build, &meta, &config.project.root_env, mode);
    let dockerfile = generator.render();
    write_dockerfile(&project_dir, &dockerfile)?;

    match mode {
        BuildMode::Standard => println!("Dockerfile generated, you can build the image with:"),
        BuildMode::Scratch => {
            println!("Dockerfile from the scratch generated, you can build the image with:")
        }
    }
    println!("$ docker build -t {} .", meta.entrypoint);

    Ok(())
}
