use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomstyle::models::{AppConfig, Style};
use roomstyle::services::DesignService;

#[derive(Parser)]
#[command(name = "roomstyle")]
#[command(about = "Roomstyle - palette analysis and style rendering for interior photos")]
struct Cli {
    /// YAML configuration file (defaults to $CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report dominant colors and scene labels of a photo
    Analyze {
        /// Source photo (PNG or JPEG)
        image: PathBuf,

        /// Number of palette colors to report
        #[arg(short, long)]
        max_colors: Option<usize>,
    },
    /// Render a photo in a style and write the JPEG
    Generate {
        /// Source photo (PNG or JPEG)
        image: PathBuf,

        /// Style name (case-sensitive; unknown names use the default look)
        #[arg(short, long)]
        style: Option<String>,

        /// Directory for the generated image
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Render and analyze a photo, printing the combined report
    Design {
        /// Source photo (PNG or JPEG)
        image: PathBuf,

        /// Style name (case-sensitive; unknown names use the default look)
        #[arg(short, long)]
        style: Option<String>,

        /// Directory for the generated image
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of palette colors to report
        #[arg(short, long)]
        max_colors: Option<usize>,
    },
    /// List the built-in styles
    Styles,
}

#[derive(Serialize)]
struct StyleListing {
    name: String,
    overlay: [u8; 4],
    effects: Vec<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomstyle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Commands::Analyze { image, max_colors } => {
            let service = DesignService::new(config);
            let analysis = service.analyze(&image, max_colors).await?;
            print_json(&analysis)
        }
        Commands::Generate {
            image,
            style,
            output_dir,
        } => {
            let service = DesignService::new(with_output_dir(config, output_dir));
            let artifact = service.generate(&image, style.as_deref().map(Style::parse)).await?;
            print_json(&artifact)
        }
        Commands::Design {
            image,
            style,
            output_dir,
            max_colors,
        } => {
            let mut config = with_output_dir(config, output_dir);
            if let Some(max_colors) = max_colors {
                config.max_colors = max_colors;
            }
            let service = DesignService::new(config);
            let report = service.design(&image, style.as_deref().map(Style::parse)).await?;
            print_json(&report)
        }
        Commands::Styles => {
            let listing: Vec<StyleListing> = Style::catalog()
                .iter()
                .map(|style| {
                    let profile = style.profile();
                    StyleListing {
                        name: style.name().to_string(),
                        overlay: profile.overlay,
                        effects: profile.effects.iter().map(|e| e.name()).collect(),
                    }
                })
                .collect();
            print_json(&listing)
        }
    }
}

fn with_output_dir(mut config: AppConfig, output_dir: Option<PathBuf>) -> AppConfig {
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    config
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
