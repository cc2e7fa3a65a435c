use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use draft_review_engine::{
    annotate_with_report, tally_markers, AnnotationStats, ParserConfig, StyleProfile,
    StyleProfileParser, TextEncoding,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "draft-review")]
#[command(about = "Check content drafts against a style guide", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Parser configuration file (JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a style guide and print its profile as JSON
    Profile(ProfileArgs),

    /// Annotate a draft with style misalignment markers
    Annotate(AnnotateArgs),

    /// Count existing misalignment markers per file
    Count(CountArgs),
}

#[derive(Args)]
struct ProfileArgs {
    /// Style guide markdown file
    style_guide: PathBuf,

    /// Decode the style guide as Latin-1 instead of UTF-8
    #[arg(long)]
    latin1: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct AnnotateArgs {
    /// Style guide markdown file
    #[arg(long)]
    style: PathBuf,

    /// Draft markdown file
    draft: PathBuf,

    /// Write the annotated draft here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print annotation statistics as JSON instead of the annotated text
    #[arg(long)]
    report: bool,
}

#[derive(Args)]
struct CountArgs {
    /// Annotated files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config.as_deref())?;
    let parser = StyleProfileParser::try_new(config).context("Invalid parser configuration")?;

    match cli.command {
        Commands::Profile(args) => run_profile(&parser, args),
        Commands::Annotate(args) => run_annotate(&parser, args),
        Commands::Count(args) => run_count(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<ParserConfig> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    ParserConfig::from_slice(&bytes)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn load_profile(
    parser: &StyleProfileParser,
    path: &Path,
    encoding: TextEncoding,
) -> Result<StyleProfile> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read style guide {}", path.display()))?;
    let profile = parser
        .parse_bytes_with(&bytes, encoding)
        .with_context(|| format!("Malformed style guide {}", path.display()))?;
    log::info!(
        "Loaded {} signals from {}",
        profile.total_signals(),
        path.display()
    );
    Ok(profile)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn run_profile(parser: &StyleProfileParser, args: ProfileArgs) -> Result<()> {
    let encoding = if args.latin1 {
        TextEncoding::Latin1
    } else {
        TextEncoding::Utf8
    };
    let profile = load_profile(parser, &args.style_guide, encoding)?;
    print_json(&profile, args.pretty)
}

fn run_annotate(parser: &StyleProfileParser, args: AnnotateArgs) -> Result<()> {
    let profile = load_profile(parser, &args.style, TextEncoding::Utf8)?;
    let draft = fs::read_to_string(&args.draft)
        .with_context(|| format!("Failed to read draft {}", args.draft.display()))?;

    let annotated = annotate_with_report(&draft, &profile);
    let stats = AnnotationStats::from_chunks(&annotated.chunks);
    log::info!(
        "{}: {} of {} sections flagged, {} markers",
        args.draft.display(),
        stats.flagged_chunks,
        stats.body_chunks,
        stats.total_markers
    );

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, &annotated.text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Annotated draft written to {}", path.display());
    }

    if args.report {
        print_json(&stats, true)
    } else {
        if args.output.is_none() {
            println!("{}", annotated.text);
        }
        Ok(())
    }
}

fn run_count(args: CountArgs) -> Result<()> {
    let mut documents = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("Not a file path: {}", path.display()))?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        documents.push((name, content));
    }

    let tally = tally_markers(
        documents
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str())),
    );
    print_json(&tally, args.pretty)
}
