//! Binary entry point for the senda CLI.
#![forbid(unsafe_code)]

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use senda::cli::config::CliConfig;
use senda::cli::session;
use senda::cli::ui::{Theme, Ui};
use senda::words::WordReport;
use senda::{graph, VertexId};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "senda",
    version,
    about = "Reachability queries over text-described directed graphs",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for one-shot responses"
    )]
    format: OutputFormat,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "SENDA_CONFIG",
        help = "Path to the CLI config file"
    )]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Color theme override")]
    theme: Option<Theme>,

    #[arg(long, global = true, help = "Suppress decorated output")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ReachCmd {
    #[arg(
        value_name = "GRAPH",
        help = "Graph description file (defaults to the configured path)"
    )]
    graph: Option<PathBuf>,

    #[arg(long, requires = "end", help = "Answer a single query from this vertex")]
    start: Option<VertexId>,

    #[arg(long, requires = "start", help = "Answer a single query to this vertex")]
    end: Option<VertexId>,
}

#[derive(Args, Debug)]
struct WordsCmd {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    #[arg(
        long,
        value_name = "LEN",
        conflicts_with = "exact",
        help = "List words strictly longer than LEN characters"
    )]
    longer_than: Option<usize>,

    #[arg(long, value_name = "LEN", help = "List words with exactly LEN characters")]
    exact: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Load a graph and answer reachability queries")]
    Reach(ReachCmd),

    #[command(about = "Report word lengths for a text file")]
    Words(WordsCmd),

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct ReachReport {
    start: VertexId,
    end: VertexId,
    reachable: bool,
}

#[derive(Debug, Serialize)]
struct WordsReport<'a> {
    total: usize,
    words: Vec<&'a str>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SENDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.clone())?;
    let theme = resolve_theme(cli.theme, &config)?;
    let ui = Ui::new(theme, cli.quiet);

    match cli.command {
        Command::Reach(cmd) => run_reach(cli.format, &config, &ui, cmd),
        Command::Words(cmd) => run_words(cli.format, &ui, cmd),
        Command::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "senda", &mut io::stdout());
            Ok(())
        }
    }
}

fn resolve_theme(flag: Option<Theme>, config: &CliConfig) -> Result<Theme, Box<dyn Error>> {
    if let Some(theme) = flag {
        return Ok(theme);
    }
    match config.theme() {
        Some(value) => Theme::from_str(value, true)
            .map_err(|_| format!("config theme '{value}' is invalid").into()),
        None => Ok(Theme::Auto),
    }
}

fn run_reach(
    format: OutputFormat,
    config: &CliConfig,
    ui: &Ui,
    cmd: ReachCmd,
) -> Result<(), Box<dyn Error>> {
    let path = cmd
        .graph
        .or_else(|| config.default_graph_path().cloned())
        .ok_or("no graph file given and none configured")?;
    let graph = graph::load_path(&path)?;

    if let (Some(start), Some(end)) = (cmd.start, cmd.end) {
        if !graph.contains(start) || !graph.contains(end) {
            return Err(format!(
                "vertex out of range: the graph has {} vertices",
                graph.vertex_count()
            )
            .into());
        }
        let report = ReachReport {
            start,
            end,
            reachable: graph::reachable(&graph, start, end),
        };
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                let verdict = if report.reachable { "exists" } else { "does not exist" };
                println!("Path from {start} to {end}: {verdict}");
            }
        }
        return Ok(());
    }

    ui.section(
        "Graph",
        [
            ("source", path.display().to_string()),
            ("vertices", graph.vertex_count().to_string()),
            ("edges", graph.edge_count().to_string()),
        ],
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let stats = session::run(&graph, &mut input, &mut output)?;
    ui.info(&format!(
        "Session closed: {} answered, {} rejected",
        stats.answered, stats.rejected
    ));
    Ok(())
}

fn run_words(format: OutputFormat, ui: &Ui, cmd: WordsCmd) -> Result<(), Box<dyn Error>> {
    let report = WordReport::from_path(&cmd.file)?;

    let (title, with_lengths, selected): (String, bool, Vec<&str>) =
        match (cmd.longer_than, cmd.exact) {
            (Some(min), None) => {
                if min == 0 {
                    return Err("--longer-than requires a positive length".into());
                }
                (
                    format!("Words longer than {min} characters:"),
                    true,
                    report.words_longer_than(min).collect(),
                )
            }
            (None, Some(len)) => {
                if len == 0 {
                    return Err("--exact requires a positive length".into());
                }
                (
                    format!("Words with length {len} (alphabetical order):"),
                    false,
                    report.words_with_length(len).collect(),
                )
            }
            _ => (
                "Words by length:".to_string(),
                true,
                report.words().iter().map(String::as_str).collect(),
            ),
        };

    match format {
        OutputFormat::Json => {
            let payload = WordsReport {
                total: selected.len(),
                words: selected,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            if report.is_empty() {
                ui.warn("No words to display");
                return Ok(());
            }
            println!("{title}");
            for (index, word) in selected.iter().enumerate() {
                if with_lengths {
                    println!("{}: '{}' (length: {})", index + 1, word, word.len());
                } else {
                    println!("{}: '{}'", index + 1, word);
                }
            }
            if selected.is_empty() {
                println!("No words matched");
            } else {
                println!("Total: {} words", selected.len());
            }
        }
    }
    Ok(())
}
