use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use xpcost::config::Config;
use xpcost::manifest::{self, Normalized};
use xpcost::resource::flags::ALL_RULES;
use xpcost::resource::get_registry;
use xpcost::{convert, region};

/// Normalize Crossplane manifests for cost estimation
#[derive(Parser, Debug)]
#[command(name = "xpcost", version, about, long_about = None)]
struct Args {
    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize manifests and print the resulting records as JSON
    Normalize {
        /// Crossplane manifest files (YAML, multi-document)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Region for resources that do not set one
        #[arg(short, long)]
        default_region: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Convert a CloudFormation template into Crossplane manifests
    Convert {
        /// CloudFormation template (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the generated manifests
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List known regions with their display names and billing zones
    Regions,
    /// List supported resource types and derived flags
    Kinds,
    /// Save the default region to the config file
    SetDefaultRegion {
        /// Region code, e.g. eu-west-1; an empty value clears the setting
        region: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("xpcost {} started with log level: {:?}", xpcost::VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("xpcost").join("xpcost.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".xpcost").join("xpcost.log");
    }
    PathBuf::from("xpcost.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    match args.command {
        Command::Normalize {
            files,
            default_region,
            pretty,
        } => run_normalize(&files, default_region.as_deref(), pretty),
        Command::Convert { input, output } => run_convert(&input, &output),
        Command::Regions => {
            run_regions();
            Ok(())
        }
        Command::Kinds => {
            run_kinds();
            Ok(())
        }
        Command::SetDefaultRegion { region } => run_set_default_region(&region),
    }
}

fn run_normalize(files: &[PathBuf], default_region: Option<&str>, pretty: bool) -> Result<()> {
    let config = Config::load();
    let default_region = config.effective_default_region(default_region);
    tracing::info!("Using default region: {}", default_region);

    let registry = get_registry();
    let mut out = Normalized::default();

    for file in files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read manifest {:?}", file))?;
        let source = file.display().to_string();
        let manifests = manifest::parse_manifests_from(&content, Some(source.as_str()))
            .with_context(|| format!("Failed to parse manifest {:?}", file))?;
        tracing::info!("Loaded {} manifests from {:?}", manifests.len(), file);
        out.extend(manifest::normalize(registry, &manifests, &default_region));
    }

    let json = if pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{json}");

    Ok(())
}

fn run_convert(input: &Path, output: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read CloudFormation template {:?}", input))?;
    let template = convert::parse_template(input, &content)
        .with_context(|| format!("Could not load the CloudFormation template {:?}", input))?;

    let conversion = convert::convert_template(&template);
    for (logical_id, err) in &conversion.errors {
        eprintln!("{logical_id}: {err}");
    }

    if conversion.manifests.is_empty() {
        anyhow::bail!("No resources were converted.");
    }

    std::fs::write(output, conversion.to_yaml()?)
        .with_context(|| format!("Failed to write {:?}", output))?;
    println!("Crossplane manifest saved to {}", output.display());

    Ok(())
}

fn run_regions() {
    for r in region::known_regions() {
        println!("{:<16} {:<28} {}", r.code, r.display_name, r.billing_zone);
    }
}

fn run_kinds() {
    for ty in get_registry().resource_types() {
        println!("{ty}");
    }
    println!();
    for rule in ALL_RULES {
        println!("{:<16} {:<28} {}", rule.name, rule.path, rule.sentinels.join(", "));
    }
}

fn run_set_default_region(region: &str) -> Result<()> {
    if !region.trim().is_empty() && region::region_info(region.trim()).is_none() {
        tracing::warn!("Region {} is not in the known region table", region);
    }

    let mut config = Config::load();
    config
        .set_default_region(region)
        .context("Failed to save the default region")?;

    match &config.default_region {
        Some(region) => println!("Default region set to {region}"),
        None => println!("Default region cleared"),
    }
    Ok(())
}
