//! Heroicons SVG CLI
//!
//! Usage:
//!   heroicons-svg [OPTIONS] <COMMAND>
//!
//! Commands:
//!   render    Render one icon to stdout
//!   list      List the generated icon templates
//!   fetch     Download the upstream dataset into the local cache file
//!   generate  Regenerate the icon template module from a dataset
//!   gallery   Write an HTML page showing every icon
//!
//! Options:
//!   -c, --config <FILE>     Tool configuration (TOML format)
//!   -l, --log-level <LEVEL> Log filter for this crate [default: warn]
//!   -h, --help              Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heroicons_svg::codegen;
use heroicons_svg::fetch::{fetch_or_load, refresh};
use heroicons_svg::gallery::render_gallery;
use heroicons_svg::renderer::render_data_uri;
use heroicons_svg::{
    icons, try_render_icon, BodyCache, FileDataset, IconRecord, ToolConfig, Variant,
};

#[derive(Parser)]
#[command(name = "heroicons-svg")]
#[command(about = "Parametrized inline SVG markup for Heroicons")]
struct Cli {
    /// Tool configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter for this crate (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one icon to stdout
    Render {
        /// Icon name as it appears in the dataset, e.g. `moon-20-solid`
        name: String,

        /// Width and height in pixels
        #[arg(short, long)]
        size: Option<u32>,

        /// CSS color for `currentColor`
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        stroke: Option<String>,

        #[arg(long)]
        stroke_width: Option<String>,

        #[arg(long)]
        fill: Option<String>,

        /// Extra attribute as key=value (repeatable)
        #[arg(short, long = "attr", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,

        /// Read icon bodies from this dataset instead of the bundled one
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Print a base64 data URI instead of markup
        #[arg(long)]
        data_uri: bool,
    },

    /// List the generated icon templates
    List,

    /// Download the upstream dataset into the local cache file
    Fetch {
        /// Ignore a fresh cache file and download anyway
        #[arg(short, long)]
        force: bool,
    },

    /// Regenerate the icon template module from a dataset
    Generate {
        /// Dataset to read (defaults to the configured cache file)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Output path (defaults to the configured codegen output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write an HTML page showing every icon
    Gallery {
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_filter = format!("heroicons_svg={}", cli.log_level);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => match ToolConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ToolConfig::default(),
    };

    match cli.command {
        Command::Render {
            name,
            size,
            color,
            stroke,
            stroke_width,
            fill,
            attrs,
            dataset,
            data_uri,
        } => {
            let template = match icons::by_name(&name) {
                Some(icon) => icon.clone(),
                None => IconRecord::new(name.as_str(), Variant::from_icon_name(&name)),
            };

            let mut builder = template.configure().with_attrs(attrs);
            if let Some(size) = size {
                builder = builder.with_size(size);
            }
            if let Some(color) = color {
                builder = builder.with_color(color);
            }
            if let Some(stroke) = stroke {
                builder = builder.with_stroke(stroke);
            }
            if let Some(stroke_width) = stroke_width {
                builder = builder.with_stroke_width(stroke_width);
            }
            if let Some(fill) = fill {
                builder = builder.with_fill(fill);
            }
            let icon = builder.build();

            let owned_cache;
            let cache = match dataset {
                Some(path) => {
                    owned_cache = BodyCache::new(FileDataset::new(path));
                    &owned_cache
                }
                None => BodyCache::bundled(),
            };

            let result = if data_uri {
                render_data_uri(&icon, cache, &config.render)
            } else {
                try_render_icon(&icon, cache, &config.render)
            };
            match result {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Command::List => {
            for icon in icons::ALL {
                println!("{}\t{}", icon.name(), icon.variant());
            }
        }

        Command::Fetch { force } => {
            let fetcher = config.dataset.fetcher();
            let cache_file = config.dataset.cache_file();
            let result = if force {
                refresh(&fetcher, &cache_file)
            } else {
                fetch_or_load(&fetcher, &cache_file)
            };
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            println!("{}", cache_file.path().display());
        }

        Command::Generate { dataset, output } => {
            let dataset = dataset.unwrap_or_else(|| config.dataset.cache_file.clone());
            let output = output.unwrap_or_else(|| config.codegen.output.clone());
            let text = read_or_exit(&dataset);

            match codegen::write_source(&text, &output) {
                Ok(count) => println!("Wrote {} icons to {}", count, output.display()),
                Err(codegen::CodegenError::Dataset(e)) => {
                    eprintln!("{}", e.format(&text, &dataset.display().to_string()));
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Command::Gallery { output } => {
            let page = render_gallery(icons::ALL, BodyCache::bundled(), &config.render);
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, page) {
                        eprintln!("Error writing file '{}': {}", path.display(), e);
                        std::process::exit(1);
                    }
                }
                None => print!("{}", page),
            }
        }
    }
}

fn read_or_exit(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
