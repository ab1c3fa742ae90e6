// Command-line entry point for Flow outline.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tracing::{error, info, warn};

use flow_outline::application::{FileOutline, OutlineUsecase};
use flow_outline::domain::{Keyword, OutlineOptions, ShowKeywords};
use flow_outline::infrastructure::{concurrency, config, logging};
use flow_outline::infrastructure::{FlowBinary, JsonExporter, TextExporter};
use flow_outline::ports::OutlineExporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AST JSON file produced by `flow ast` (can specify multiple)
    #[arg(short, long)]
    input: Vec<PathBuf>,

    /// JavaScript source file to run through the checker (can specify multiple)
    #[arg(short, long)]
    source: Vec<PathBuf>,

    /// Checker binary used for --source files
    #[arg(long, default_value = "flow")]
    flow_bin: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// TOML file with outline options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show a keyword in labels (can specify multiple)
    #[arg(long = "show-keyword", value_enum)]
    show_keywords: Vec<Keyword>,

    /// Show every keyword
    #[arg(long)]
    all_keywords: bool,

    /// Do not render function parameter lists
    #[arg(long)]
    no_args: bool,

    /// Maximum nesting depth of the outline
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

enum Job {
    Ast(PathBuf),
    Source(PathBuf),
}

impl Job {
    fn path(&self) -> &Path {
        match self {
            Job::Ast(path) | Job::Source(path) => path.as_path(),
        }
    }
}

fn build_options(cli: &Cli) -> Result<OutlineOptions> {
    let mut options = match &cli.config {
        Some(path) => config::load_options(path)?,
        None => OutlineOptions::default(),
    };
    if cli.all_keywords {
        options.show_keywords = ShowKeywords::all();
    }
    for keyword in &cli.show_keywords {
        options.show_keywords.set(*keyword, true);
    }
    if cli.no_args {
        options.show_function_args = false;
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    Ok(options)
}

fn run_job(job: &Job, usecase: &OutlineUsecase) -> Result<FileOutline> {
    let path = job.path();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read input file {}", path.display()))?;
    let outline = match job {
        Job::Ast(_) => usecase.outline_ast(&content),
        Job::Source(_) => usecase.outline_source(&content),
    }
    .with_context(|| format!("Failed to outline {}", path.display()))?;

    Ok(FileOutline {
        path: path.display().to_string(),
        outline,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = build_options(&cli)?;

    let jobs: Vec<Job> = cli
        .input
        .iter()
        .cloned()
        .map(Job::Ast)
        .chain(cli.source.iter().cloned().map(Job::Source))
        .collect();

    if jobs.is_empty() {
        bail!("Please provide at least one --input <ast.json> or --source <file.js>");
    }

    if jobs.len() > 1 {
        if let Err(e) = concurrency::init_thread_pool() {
            warn!("using default thread pool: {}", e);
        }
    }

    let checker = FlowBinary::new(&cli.flow_bin);
    let usecase = OutlineUsecase {
        checker: &checker,
        options: &options,
    };

    let results: Vec<Result<FileOutline>> =
        jobs.par_iter().map(|job| run_job(job, &usecase)).collect();

    let mut outlines = Vec::with_capacity(results.len());
    let mut failures = 0;
    for result in results {
        match result {
            Ok(outline) => outlines.push(outline),
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{} of {} file(s) could not be outlined", failures, jobs.len());
    }

    let exporter: Box<dyn OutlineExporter> = match cli.format {
        Format::Json => Box::new(JsonExporter { pretty: cli.pretty }),
        Format::Text => Box::new(TextExporter),
    };

    match &cli.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            exporter.export(&outlines, &mut file)?;
            info!(path = %path.display(), files = outlines.len(), "outline written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            exporter.export(&outlines, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
