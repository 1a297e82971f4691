use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use casify::batch::{self, ConversionMode};
use casify::cli::output::{self, OutputFormat};
use casify::{Case, Config, Transform};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casify")]
#[command(version, about = "Convert identifiers between case conventions", long_about = None)]
struct Cli {
    /// Strings to convert (reads --file or stdin lines when empty)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case (snake_case, UPPER_SNAKE_CASE, kebab-case, UPPER-KEBAB-CASE, camelCase, UpperCamelCase)
    #[arg(short, long)]
    case: Option<Case>,

    /// Custom separator placed between words
    #[arg(short, long, conflicts_with_all = ["case", "words"])]
    separator: Option<String>,

    /// Custom per-word transform (lower, upper, title, keep)
    #[arg(short, long, conflicts_with_all = ["case", "words"])]
    transform: Option<Transform>,

    /// Only print the words each input splits into
    #[arg(short, long)]
    words: bool,

    /// Read inputs line by line from these files
    #[arg(short, long, value_name = "PATH")]
    file: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported cases with an example
    List,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casify", &mut io::stdout());
        return Ok(());
    }

    // Decorations only make sense on a terminal
    let no_color = cli.no_color || !io::stdout().is_terminal();
    let config = Config::load(cli.case, cli.format, no_color)?;
    if !config.color {
        colored::control::set_override(false);
    }

    if let Some(Commands::List) = cli.command {
        output::print_cases(config.color);
        return Ok(());
    }

    let mode = select_mode(&cli, &config);
    log::debug!("conversion mode: {}", mode);

    let inputs = batch::read_inputs(&cli.inputs, &cli.file)?;
    let conversions = batch::convert_all(&inputs, &mode, config.parallel_threshold);

    output::print_conversions(&conversions, &mode, config.format, config.color)
}

fn select_mode(cli: &Cli, config: &Config) -> ConversionMode {
    if cli.words {
        return ConversionMode::Words;
    }

    if cli.separator.is_some() || cli.transform.is_some() {
        return ConversionMode::Custom {
            separator: cli.separator.clone().unwrap_or_default(),
            transform: cli.transform.unwrap_or(Transform::Keep),
        };
    }

    ConversionMode::Case(config.case)
}
