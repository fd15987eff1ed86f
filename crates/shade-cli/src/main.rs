//! `shade`: print the luminance-derived palette for a base color.
//!
//! ```text
//! shade --base '#3366cc' --mode dark
//! shade --config theme.yaml --format json
//! shade mode --mode system
//! ```

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use shade::{effective_color_mode, ColorMode, ModePreference, SystemPlatform, ThemeConfig};

/// Environment variable consulted when no base color is given otherwise.
const BASE_COLOR_ENV: &str = "SHADE_BASE_COLOR";

/// Derive CSS color custom properties from a single base color
#[derive(Parser, Debug)]
#[command(name = "shade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    palette: PaletteArgs,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective color mode and exit
    Mode {
        /// Mode preference to resolve
        #[arg(long, default_value = "system")]
        mode: ModePreference,
    },
}

#[derive(Args, Debug, Default)]
struct PaletteArgs {
    /// YAML theme configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base color (hex, rgb() or CSS name)
    #[arg(short, long, value_name = "COLOR")]
    base: Option<String>,

    /// light, dark or system
    #[arg(short, long)]
    mode: Option<ModePreference>,

    /// Luminance matching precision
    #[arg(long)]
    precision: Option<f64>,

    /// CSS selector for the emitted rule
    #[arg(long)]
    selector: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Css,
    Json,
    Yaml,
}

/// Merges the config file, flags and environment into one configuration.
///
/// Flags win over the file; the environment only fills a missing base color.
fn resolve_config(args: &PaletteArgs, env_base: Option<String>) -> Result<ThemeConfig> {
    let mut config = match &args.config {
        Some(path) => ThemeConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let base = args.base.clone().or(env_base).with_context(|| {
                format!(
                    "no base color: pass --base, set {}, or use --config",
                    BASE_COLOR_ENV
                )
            })?;
            ThemeConfig::new(base)
        }
    };

    if let Some(base) = &args.base {
        config.base_color = base.clone();
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(selector) = &args.selector {
        config.selector = selector.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Computes the palette for `config` in `mode` and formats it.
fn render(config: &ThemeConfig, mode: ColorMode, format: OutputFormat) -> Result<String> {
    let vars = config
        .builder()
        .build(&config.base_color, mode)
        .with_context(|| format!("computing palette for {}", config.base_color))?;

    let output = match format {
        OutputFormat::Css => vars.to_css(&config.selector),
        OutputFormat::Json => serde_json::to_string_pretty(&vars)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&vars)?,
    };
    Ok(output)
}

fn run(cli: Cli) -> Result<String> {
    let platform = SystemPlatform::new();

    if let Some(Command::Mode { mode }) = cli.command {
        let effective = effective_color_mode(mode, &platform);
        debug!("{} resolved to {}", mode, effective);
        return Ok(format!("{}\n", effective));
    }

    let config = resolve_config(&cli.palette, std::env::var(BASE_COLOR_ENV).ok())?;
    let mode = effective_color_mode(config.mode, &platform);
    info!(
        "palette for {} in {} mode ({} preference)",
        config.base_color, mode, config.mode
    );
    render(&config, mode, cli.palette.format)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    let output = run(cli)?;
    print!("{}", output);
    Ok(())
}
