use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{info, Level};

use y2k_memegen::{
    composer::MemeComposer,
    config::Config,
    effects::{ImageStyle, StylePick, TextStyle},
    output::OutputManager,
};

#[derive(Parser)]
#[command(
    name = "y2k-memegen",
    version,
    about = "Generate Y2K-styled meme images from text or source pictures",
    long_about = "y2k-memegen synthesizes retro raster artifacts: gradient grid backgrounds, \
CRT/VHS/holographic/chrome/neon/pixelate image effects, and five styles of Y2K text lettering."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output directory for generated memes
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Filename prefix for generated memes
    #[arg(short, long)]
    prefix: Option<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a text meme on a synthesized Y2K background
    Text {
        /// The text to render
        text: String,

        /// Text effect (gradient, glitch, neon, chrome, retro, random)
        #[arg(short, long, default_value = "random")]
        style: String,

        /// Canvas size as WIDTHxHEIGHT
        #[arg(long, default_value = "800x600")]
        size: String,
    },

    /// Apply a Y2K effect to a source image, with an optional caption
    Image {
        /// Path to the source image (PNG, JPEG, GIF, BMP)
        image: PathBuf,

        /// Image effect (crt, vhs, holographic, chrome, neon, pixelate, random)
        #[arg(short, long, default_value = "random")]
        effect: String,

        /// Caption overlaid bottom-center
        #[arg(short, long, default_value = "")]
        caption: String,
    },

    /// Generate a completely random meme
    Random,
}

fn parse_size(spec: &str) -> Result<(u32, u32)> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| anyhow::anyhow!("Size must look like 800x600, got '{}'", spec))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Starting y2k-memegen v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    if let Some(out_dir) = cli.out_dir {
        config.output.directory = out_dir;
    }
    if let Some(prefix) = cli.prefix {
        config.output.prefix = prefix;
    }
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Seeding random generator with {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let output = OutputManager::new(&config.output.directory)?;
    let prefix = config.output.prefix.clone();
    let composer = MemeComposer::new(config);

    let artifact = match cli.command {
        Command::Text { text, style, size } => {
            let size = parse_size(&size)?;
            composer.generate_text_meme(&text, StylePick::<TextStyle>::parse(&style), size, &mut rng)?
        }
        Command::Image {
            image,
            effect,
            caption,
        } => composer.generate_image_meme(
            &image,
            &caption,
            StylePick::<ImageStyle>::parse(&effect),
            &mut rng,
        )?,
        Command::Random => composer.generate_random_meme(&mut rng)?,
    };

    let path = output.save(&artifact.raster, &prefix)?;
    info!("Effect: {}", artifact.effect);
    println!("{}", path.display());
    Ok(())
}
