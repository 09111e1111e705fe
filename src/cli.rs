use clap::{ArgAction, Parser, ValueEnum};

use log::info;
use std::path::PathBuf;

use crate::errors::{Error, Result};
use crate::{generate, ColorVariant, Format, GenerateConfig, LogoOption, Packaging, SvgDocument};

/// Color choices accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Standard,
    Light,
    Dark,
    Monochrome,
    /// Every color variant
    All,
}

impl ColorChoice {
    fn variants(self) -> Vec<ColorVariant> {
        match self {
            Self::Standard => vec![ColorVariant::Standard],
            Self::Light => vec![ColorVariant::Light],
            Self::Dark => vec![ColorVariant::Dark],
            Self::Monochrome => vec![ColorVariant::Monochrome],
            Self::All => ColorVariant::ALL.to_vec(),
        }
    }
}

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Color of the logo to generate (Repeatable)
    #[arg(short, long = "color", value_name = "COLOR")]
    colors: Vec<ColorChoice>,

    /// Additional feature to add to the logo (Repeatable, all apply at once)
    #[arg(short, long = "option", value_name = "OPTION")]
    options: Vec<LogoOption>,

    /// Desired image file format (Repeatable)
    #[arg(short, long = "format", value_name = "FORMAT", required = true)]
    formats: Vec<Format>,

    /// Desired logo height, only for non-vector formats (Repeatable)
    #[arg(short = 'H', long = "height", value_name = "HEIGHT",
          value_parser = clap::value_parser!(u32).range(1..))]
    heights: Vec<u32>,

    /// Desired logo width, only for non-vector formats (Repeatable)
    #[arg(short = 'W', long = "width", value_name = "WIDTH",
          value_parser = clap::value_parser!(u32).range(1..))]
    widths: Vec<u32>,

    /// Write a plain directory instead of a zip archive
    #[arg(long = "no-zip", visible_alias = "nz")]
    no_zip: bool,

    /// Source SVG artwork
    #[arg(short, long, default_value = "logo.svg")]
    source: PathBuf,

    /// Output path; '.zip' is appended unless --no-zip is given
    #[arg(short, long, default_value = "./codestar_logos")]
    destination: PathBuf,

    /// Log more detail (-v for progress, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Top-level configuration used by the `codestar-logo` command-line process.
///
/// 'front-end' settings (where to read and write, how to package) live
/// directly in this struct; what to render is in the embedded
/// `GenerateConfig`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path of the source SVG artwork
    pub source: PathBuf,
    /// Destination path, before any packaging suffix
    pub destination: PathBuf,
    pub packaging: Packaging,
    /// Number of `-v` flags given
    pub verbosity: u8,
    /// render config options
    pub generate: GenerateConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        let packaging = if args.no_zip {
            Packaging::Directory
        } else {
            Packaging::Zip
        };
        if packaging == Packaging::Directory && args.destination.exists() && args.source.exists()
        {
            // The destination directory is wiped before copying, so refuse to
            // run if that would take the source artwork with it.
            let dest = args.destination.canonicalize()?;
            let source = args.source.canonicalize()?;
            if source.starts_with(&dest) {
                return Err(Error::Cli(format!(
                    "source '{}' must not be inside the destination directory '{}'",
                    args.source.display(),
                    args.destination.display()
                )));
            }
        }

        let generate = GenerateConfig {
            colors: args.colors.into_iter().flat_map(ColorChoice::variants).collect(),
            options: args.options,
            formats: args.formats,
            widths: args.widths,
            heights: args.heights,
        }
        .dedup();

        Ok(Self {
            source: args.source,
            destination: args.destination,
            packaging,
            verbosity: args.verbose,
            generate,
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args)
            .ok_or_else(|| Error::Cli(format!("could not split command line '{args}'")))?;
        let args = Arguments::try_parse_from(normalize_args(args))
            .map_err(|e| Error::Cli(e.to_string()))?;
        Self::from_args(args)
    }

    /// Log filter used when `RUST_LOG` isn't set
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// `-nz` predates the single-character short flags clap supports; map it
/// to its long form.
fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .map(|a| if a == "-nz" { "--no-zip".to_string() } else { a })
        .collect()
}

/// Create a `Config` object from process arguments.
///
/// Invalid arguments print usage and exit the process, as clap does.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse_from(normalize_args(std::env::args()));
    Config::from_args(args)
}

/// Set up `env_logger` at the config's verbosity; `RUST_LOG` takes priority.
pub fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level());
    // a logger may already be installed (e.g. in tests)
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Run the `codestar-logo` program with a given `Config`.
///
/// Returns the path of the created archive or directory. The staging
/// directory is removed on return, whether or not the run succeeded.
pub fn run(config: Config) -> Result<PathBuf> {
    let template = SvgDocument::load(&config.source)?;
    let staging = tempfile::Builder::new()
        .prefix("codestar_logos.")
        .tempdir()?;

    let written = generate(&template, &config.generate, staging.path())?;
    info!("rendered {} file(s)", written.len());

    let target = config
        .packaging
        .package(staging.path(), &config.destination)?;
    eprintln!("Created {}", target.display());
    Ok(target)
}
