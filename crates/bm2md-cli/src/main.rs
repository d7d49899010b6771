mod io;

use bm2md_core::config::Config;
use bm2md_core::Translation;
use clap::Parser;
use io::CliError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Converted when no input is given, matching the usual export name.
const DEFAULT_INPUT: &str = "favourites.html";
const DEFAULT_OUTPUT: &str = "bookmarks.md";

#[derive(Parser, Debug)]
#[command(name = "bm2md", about = "Convert browser bookmark exports to Markdown")]
struct Cli {
    /// Bookmark export file(s) or directory. `-` reads stdin.
    /// Omit to convert ./favourites.html into ./bookmarks.md.
    #[arg()]
    input: Vec<PathBuf>,

    /// Output file (single input only) or directory (multiple inputs).
    /// Omit to write to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File extension for output files in directory mode (default: "md").
    #[arg(long, default_value = "md")]
    ext: String,

    /// Log per-file detail. RUST_LOG takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    report(run(&cli))
}

/// Failures are reported on the console; the process still exits normally.
fn report(result: Result<(), CliError>) -> ExitCode {
    if let Err(e) = result {
        error!("{e}");
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    if cli.input.is_empty() {
        let output = cli.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        return convert_file(Path::new(DEFAULT_INPUT), Some(&output), &config);
    }

    if cli.input.len() == 1 && cli.input[0] == Path::new("-") {
        let html = io::read_stdin()?;
        let translation = bm2md_core::translate(&html, &config);
        return emit(&translation, "<stdin>", cli.output.as_deref());
    }

    let files = io::collect_html_files(&cli.input);
    match files.as_slice() {
        [] => Err(CliError::NoInputs),
        [file] => convert_file(file, cli.output.as_deref(), &config),
        _ => {
            let out_dir = cli.output.as_deref().ok_or(CliError::MissingOutputDir)?;
            for file in &files {
                let out_path = out_dir.join(output_name(file, &cli.ext));
                convert_file(file, Some(&out_path), &config)?;
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let toml_str = io::read_input(path)?;
    let config = Config::from_toml(&toml_str).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(config = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn convert_file(input: &Path, output: Option<&Path>, config: &Config) -> Result<(), CliError> {
    info!("Reading from: {}", input.display());
    let html = io::read_input(input)?;
    let translation = bm2md_core::translate(&html, config);
    emit(&translation, &input.display().to_string(), output)
}

fn emit(translation: &Translation, source: &str, output: Option<&Path>) -> Result<(), CliError> {
    debug!(
        source,
        folders = translation.folders,
        links = translation.links,
        "converted"
    );
    match output {
        Some(path) => {
            io::write_output(path, &translation.markdown)?;
            info!("Exported {} -> {}", source, path.display());
            Ok(())
        }
        None => io::write_stdout(&translation.markdown),
    }
}

fn output_name(file: &Path, ext: &str) -> String {
    let stem = file
        .file_stem()
        .map_or_else(|| "bookmarks".to_string(), |s| s.to_string_lossy().to_string());
    format!("{stem}.{ext}")
}
