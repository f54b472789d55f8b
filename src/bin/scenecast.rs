use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scenecast", version)]
#[command(about = "Convert an Excalidraw diagram into a Manim scene script")]
struct Cli {
    /// Input Excalidraw JSON document.
    input: PathBuf,

    /// Output Python script path.
    output: PathBuf,

    /// Manim config file supplying canvas dimensions.
    #[arg(default_value = "manim.cfg")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let canvas = scenecast::CanvasConfig::load(&cli.config);
    tracing::debug!(
        frame_width = canvas.frame_width,
        frame_height = canvas.frame_height,
        "canvas dimensions"
    );

    let outcome = scenecast::convert(&cli.input, &cli.output, &canvas)
        .with_context(|| format!("convert '{}'", cli.input.display()))?;

    match outcome {
        scenecast::Conversion::Empty => {
            println!("no elements found in '{}'", cli.input.display());
        }
        scenecast::Conversion::Written { scenes } => {
            eprintln!("wrote {} ({scenes} scenes)", cli.output.display());
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
