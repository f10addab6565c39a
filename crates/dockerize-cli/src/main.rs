mod args;
mod commands;

use clap::Parser;
use dockerize_build::BuildMode;

#[derive(Parser)]
#[command(
    name = "dockerize",
    about = "Generate a Dockerfile for the Go program in the current directory"
)]
#[command(version)]
struct Cli {
    /// Port to expose in docker (default: 3000, or [project].expose in dockerize.toml)
    #[arg(long, short = 'e', value_name = "PORT")]
    expose: Option<String>,
    /// Cross-compile for Linux and build the image from scratch
    #[arg(long, short = 's')]
    scratch: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(e) => {
            if std::env::var_os("RUST_LOG").is_some() {
                eprintln!("ignoring invalid RUST_LOG: {e}");
            }
            tracing_subscriber::EnvFilter::new("warn")
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(args::normalize_legacy_flags(std::env::args_os()));

    commands::generate(cli.expose, BuildMode::from_scratch_flag(cli.scratch)).await?;

    Ok(())
}
