use clap::{Parser, Subcommand, ValueEnum};
use ik_shortcodes::{collections, config, filters, output, passthrough, shortcodes::Shortcodes};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Stderr log verbosity when `RUST_LOG` is unset.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Parser)]
#[command(name = "ik-shortcodes")]
#[command(about = "ImageKit shortcodes and site helpers")]
#[command(long_about = "\
ImageKit shortcodes and site helpers

Renders the site's image shortcodes to CDN URLs and markup, applies template
filters, copies passthrough assets and lists the pages collection.

The CDN endpoint comes from IMAGEKIT_URL (environment or .env), then
[imagekit].url in config.toml, then https://ik.imagekit.io/your-account.

Examples:

  ik-shortcodes render img team/photo.jpg \"Our team\" 1200
  ik-shortcodes render bgimg hero.jpg
  ik-shortcodes filter date 2026-10-19 en-US
  ik-shortcodes copy

Run 'ik-shortcodes gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root (holds config.toml and the input directory)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a shortcode (img, picture, bgimg, lazyimg, avatar, year, icon)
    Render {
        name: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Apply a filter (limit, hash, date, slugify)
    Filter {
        name: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Copy passthrough assets into the output directory
    Copy,
    /// List the pages collection
    Pages,
    /// Print the resolved configuration
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Resolve the site configuration for `root`, after `.env` has been loaded.
fn load_site_config(root: &Path) -> Result<config::SiteConfig, config::ConfigError> {
    let site_config = config::load_config(root)?;
    info!(base_url = %site_config.imagekit.url, "configuration resolved");
    Ok(site_config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // RUST_LOG may come from .env, so load it before the subscriber.
    let dotenv = dotenvy::dotenv();
    init_logging(cli.log_level);

    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "loaded .env");
    }

    match cli.command {
        Command::Render { name, args } => {
            let site_config = load_site_config(&cli.root)?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let out = Shortcodes::from_config(&site_config).render(&name, &args)?;
            println!("{}", out);
        }
        Command::Filter { name, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            println!("{}", filters::apply(&name, &args)?);
        }
        Command::Copy => {
            let site_config = load_site_config(&cli.root)?;
            let entries = passthrough::copy_passthrough(&cli.root, &site_config)?;
            output::print_copy_output(&entries, &cli.root);
        }
        Command::Pages => {
            let site_config = load_site_config(&cli.root)?;
            let pages = collections::collect(&cli.root, &site_config.collections.pages)?;
            output::print_pages_output(&pages);
        }
        Command::Check => {
            let site_config = load_site_config(&cli.root)?;
            output::print_check_output(&site_config);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
