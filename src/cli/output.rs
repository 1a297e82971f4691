use crate::batch::{Conversion, ConversionMode};
use crate::case::Case;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input used to demonstrate each case in `casify list`.
pub const SAMPLE_INPUT: &str = "XMLHttpRequest id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    mode: String,
    count: usize,
    results: &'a [Conversion],
}

pub fn print_conversions(
    conversions: &[Conversion],
    mode: &ConversionMode,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    match format {
        // An empty output is still a line; no inputs means no lines at all
        OutputFormat::Text if conversions.is_empty() => {}
        OutputFormat::Text => println!("{}", render_text(conversions, mode, colored_output)),
        OutputFormat::Json => println!("{}", render_json(conversions, mode)?),
    }
    Ok(())
}

/// One line per input. Coloured output with several inputs also shows the input.
pub fn render_text(conversions: &[Conversion], mode: &ConversionMode, colored_output: bool) -> String {
    let show_input = colored_output && conversions.len() > 1;

    conversions
        .iter()
        .map(|conversion| {
            let output = if colored_output {
                format_output(conversion, mode)
            } else {
                conversion.output.clone()
            };

            if show_input {
                format!("{} {} {}", conversion.input.dimmed(), "→".dimmed(), output)
            } else {
                output
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_output(conversion: &Conversion, mode: &ConversionMode) -> String {
    match mode {
        ConversionMode::Words => conversion
            .words
            .iter()
            .map(|w| w.green().bold().to_string())
            .collect::<Vec<_>>()
            .join(&" · ".dimmed().to_string()),
        _ => conversion.output.green().bold().to_string(),
    }
}

pub fn render_json(conversions: &[Conversion], mode: &ConversionMode) -> Result<String> {
    let output = JsonOutput {
        mode: mode.to_string(),
        count: conversions.len(),
        results: conversions,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_cases(colored: bool) {
    if colored {
        println!("{}", "Supported cases:".bold());
    } else {
        println!("Supported cases:");
    }
    println!();

    for case in Case::ALL {
        let sample = case.apply(SAMPLE_INPUT);
        if colored {
            println!("  {:<18} {}", case.name().cyan().bold(), sample.green());
        } else {
            println!("  {:<18} {}", case.name(), sample);
        }
    }

    println!();
    let note = format!("Sample input: {:?}", SAMPLE_INPUT);
    if colored {
        println!("{}", note.dimmed());
    } else {
        println!("{}", note);
    }
}
