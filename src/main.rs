use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use kira_speechrubric::grammar::language_tool::{DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS};
use kira_speechrubric::input::read_transcript;
use kira_speechrubric::lexicon::loader::load_rubric;
use kira_speechrubric::logging::init_logging;
use kira_speechrubric::pipeline::stage7_report::{ReportFormat, render_report, write_reports};
use kira_speechrubric::report::ReportMeta;
use kira_speechrubric::{AnalysisError, Analyzer, GrammarCheckerCache, LanguageToolConfig};

#[derive(Debug, Parser)]
#[command(name = "kira-speechrubric", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a transcript against the rubric
    Run(RunConfig),
}

#[derive(Debug, Clone, clap::Args)]
struct RunConfig {
    /// Transcript file, or `-` for stdin
    #[arg(long)]
    transcript: PathBuf,

    /// Speech duration in seconds
    #[arg(long, allow_negative_numbers = true)]
    duration: f64,

    /// JSON rubric overriding the built-in tables
    #[arg(long)]
    rubric: Option<PathBuf>,

    /// LanguageTool server base URL; grammar gets full marks without it
    #[arg(long, env = "KIRA_LANGUAGETOOL_URL")]
    languagetool_url: Option<String>,

    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    languagetool_timeout: u64,

    /// Write report.txt and summary.json here instead of printing
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose, cli.log_json) {
        eprintln!("failed to initialise logging: {err}");
    }
    let result = match &cli.command {
        Command::Run(config) => run(config),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AnalysisError> {
    let rubric = load_rubric(config.rubric.as_deref())?;
    let transcript = read_transcript(&config.transcript)?;

    let checkers = GrammarCheckerCache::new(languagetool_config(config));
    let checker = checkers.get();
    let grammar_checker = checker.name().to_string();
    let analyzer = Analyzer::new(rubric, checker);

    let assessment = analyzer.analyze(&transcript, config.duration)?;

    let meta = ReportMeta {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_seconds: config.duration,
        grammar_checker,
    };

    match &config.out {
        Some(out_dir) => write_reports(&assessment, &meta, out_dir)?,
        None => println!("{}", render_report(&assessment, &meta, config.format.into())?),
    }
    Ok(())
}

fn languagetool_config(config: &RunConfig) -> Option<LanguageToolConfig> {
    let url = config.languagetool_url.as_ref()?.trim();
    if url.is_empty() {
        return None;
    }
    Some(LanguageToolConfig {
        url: url.to_string(),
        language: config.language.clone(),
        timeout_secs: config.languagetool_timeout,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
