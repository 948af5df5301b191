use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epaper_convert::config::Overrides;
use epaper_convert::{convert, AppConfig};
use epd_frame::FitPolicy;

#[derive(Parser)]
#[command(name = "epaper-convert")]
#[command(about = "Convert images into packed 4-bit frames for color e-paper panels")]
struct Cli {
    /// YAML configuration file (panels, palettes, defaults)
    #[arg(long, global = true, env = "EPAPER_CONFIG")]
    config: Option<PathBuf>,

    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a frame file
    Convert {
        /// Input image (any format the image crate decodes)
        input: PathBuf,

        /// Output frame file
        #[arg(short, long)]
        output: PathBuf,

        /// Panel name from the configuration
        #[arg(long)]
        panel: Option<String>,

        /// Palette name from the configuration
        #[arg(long)]
        palette: Option<String>,

        /// Fit policy: crop, fit or stretch
        #[arg(long)]
        fit: Option<FitPolicy>,

        /// Map to the nearest color without error diffusion
        #[arg(long)]
        no_dither: bool,

        /// Also write a PNG preview of the quantized image
        #[arg(long)]
        preview: Option<PathBuf>,
    },
    /// Render an existing frame file to PNG
    Inspect {
        /// Frame file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Panel name from the configuration
        #[arg(long)]
        panel: Option<String>,

        /// Palette name from the configuration
        #[arg(long)]
        palette: Option<String>,
    },
    /// List configured palettes and their codes
    Palettes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            panel,
            palette,
            fit,
            no_dither,
            preview,
        } => {
            let overrides = Overrides {
                panel,
                palette,
                fit,
                dither: no_dither.then_some(false),
            };
            let settings = config.settings(&overrides)?;
            let summary = convert::convert_file(&input, &output, preview.as_deref(), &settings)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Inspect {
            input,
            output,
            panel,
            palette,
        } => {
            let panel_spec = config.panel(panel.as_deref().unwrap_or(&config.defaults.panel))?;
            let palette = config.palette(palette.as_deref().unwrap_or(&config.defaults.palette))?;
            let frame = convert::inspect_file(&input, &output, panel_spec, &palette)?;
            println!(
                "Rendered {} ({}x{}, sha256 {})",
                output.display(),
                frame.width(),
                frame.height(),
                convert::frame_digest(&frame)
            );
        }
        Commands::Palettes => run_palettes_command(&config)?,
    }

    Ok(())
}

/// Install the fmt subscriber; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "epaper_convert=debug,epd_frame=debug"
    } else {
        "epaper_convert=info,epd_frame=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_palettes_command(config: &AppConfig) -> anyhow::Result<()> {
    for name in config.palettes.keys() {
        let palette = config.palette(name)?;
        let marker = if *name == config.defaults.palette {
            " (default)"
        } else {
            ""
        };
        println!("{name}{marker}:");
        for entry in palette.entries() {
            println!(
                "  {:#03x}  {}  {}",
                entry.code(),
                entry.color(),
                entry.name()
            );
        }
        println!("  background: {}", palette.background());
    }
    Ok(())
}
