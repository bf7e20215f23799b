use clap::{Parser, Subcommand};
use photostrip::codec::{self, Quality};
use photostrip::config::{self, BoothConfig};
use photostrip::filters::{self, FilterKind};
use photostrip::session::Session;
use photostrip::strip::{MAX_PHOTOS, Orientation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photostrip")]
#[command(about = "Photobooth filters and photo-strip composition")]
#[command(long_about = "\
Photobooth filters and photo-strip composition

Apply deterministic pixel filters to photos and compose up to four of them
into a single strip image, left to right (or top to bottom) in the order
given.

Filters:

  none              pass-through
  vintage           sepia matrix with a warm bias
  black-and-white   BT.601 grayscale (alias: bw)
  soften            flat brightness lift (alias: blur)
  enhance           1.3x channel boost
  retro             warm highlights, cooled blues

Layout and output settings come from booth.toml when present; run
'photostrip gen-config' to print a documented stock file.")]
#[command(version)]
struct Cli {
    /// Path to booth.toml (stock defaults when the file is absent)
    #[arg(long, default_value = "booth.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a filter to one photo
    Filter {
        input: PathBuf,
        /// Output file (.jpg or .png)
        output: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        filter: FilterKind,
    },
    /// Compose photos into a strip, in argument order
    Strip {
        /// Source photos, leftmost (or topmost) first
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output file (.jpg or .png)
        #[arg(long, short)]
        output: PathBuf,
        /// Canvas width (overrides config)
        #[arg(long)]
        width: Option<u32>,
        /// Canvas height (overrides config)
        #[arg(long)]
        height: Option<u32>,
        /// Gutter around and between photos (overrides config)
        #[arg(long)]
        padding: Option<u32>,
        /// Stack photos top to bottom instead of left to right
        #[arg(long)]
        vertical: bool,
        /// Print the session summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available filters
    Filters,
    /// Apply a randomly chosen filter
    Magic {
        input: PathBuf,
        /// Output file (.jpg or .png)
        output: PathBuf,
    },
    /// Print a stock booth.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let booth = BoothConfig::load_or_default(&cli.config)?;
    let quality = Quality::new(booth.output.quality);

    match cli.command {
        Command::Filter {
            input,
            output,
            filter,
        } => {
            let photo = codec::load_photo(&input)?;
            let processed = filters::apply(&photo, filter)?;
            codec::save_photo(&processed, &output, quality)?;
            println!(
                "{} applied: {} -> {}",
                filter,
                input.display(),
                output.display()
            );
        }
        Command::Strip {
            inputs,
            output,
            width,
            height,
            padding,
            vertical,
            json,
        } => {
            if inputs.len() > MAX_PHOTOS {
                return Err(format!(
                    "a strip takes at most {MAX_PHOTOS} photos, got {}",
                    inputs.len()
                )
                .into());
            }

            let mut settings = booth.strip.clone();
            if let Some(w) = width {
                settings.width = w;
            }
            if let Some(h) = height {
                settings.height = h;
            }
            if let Some(p) = padding {
                settings.padding = p;
            }
            if vertical {
                settings.orientation = Orientation::Vertical;
            }

            let mut session = Session::new();
            println!("==> Session {}", session.id());
            for input in &inputs {
                session.add_photo(codec::load_photo(input)?, FilterKind::None)?;
                println!("  {}", input.display());
            }

            let strip = session.compose_strip(&settings.layout(), settings.min_photos)?;
            codec::save_photo(&strip, &output, quality)?;
            println!(
                "==> Strip {}x{} -> {}",
                strip.width(),
                strip.height(),
                output.display()
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&session.summary())?);
            }
        }
        Command::Filters => {
            for kind in FilterKind::ALL {
                println!("{kind}");
            }
        }
        Command::Magic { input, output } => {
            let kind = FilterKind::random(&mut rand::thread_rng());
            let photo = codec::load_photo(&input)?;
            let processed = filters::apply(&photo, kind)?;
            codec::save_photo(&processed, &output, quality)?;
            println!(
                "{} applied: {} -> {}",
                kind,
                input.display(),
                output.display()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
