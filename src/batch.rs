use crate::case::{convert, words, Case, Transform};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// What to do with each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionMode {
    Case(Case),
    Custom {
        separator: String,
        transform: Transform,
    },
    /// Only split into words, joined by a single space.
    Words,
}

impl ConversionMode {
    pub fn apply(&self, input: &str) -> String {
        match self {
            ConversionMode::Case(case) => case.apply(input),
            ConversionMode::Custom {
                separator,
                transform,
            } => convert(input, separator, |word| transform.apply(word)),
            ConversionMode::Words => convert(input, " ", str::to_string),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Case(case) => write!(f, "{}", case),
            ConversionMode::Custom {
                separator,
                transform,
            } => write!(f, "custom(separator={:?}, transform={})", separator, transform),
            ConversionMode::Words => write!(f, "words"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub words: Vec<String>,
}

impl Conversion {
    pub fn new(input: &str, mode: &ConversionMode) -> Self {
        Self {
            input: input.to_string(),
            output: mode.apply(input),
            words: words(input).map(str::to_string).collect(),
        }
    }
}

/// Convert every input independently, keeping the input order.
///
/// Batches of at least `parallel_threshold` inputs are spread over the rayon pool.
pub fn convert_all(
    inputs: &[String],
    mode: &ConversionMode,
    parallel_threshold: usize,
) -> Vec<Conversion> {
    if inputs.len() >= parallel_threshold.max(1) && inputs.len() > 1 {
        log::debug!(
            "converting {} inputs in parallel (threshold {})",
            inputs.len(),
            parallel_threshold
        );
        inputs
            .par_iter()
            .map(|input| Conversion::new(input, mode))
            .collect()
    } else {
        log::debug!("converting {} inputs sequentially", inputs.len());
        inputs
            .iter()
            .map(|input| Conversion::new(input, mode))
            .collect()
    }
}

/// Collect inputs: positional arguments first, then files, then stdin.
pub fn read_inputs(args: &[String], files: &[PathBuf]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    if !files.is_empty() {
        let mut inputs = Vec::new();
        for path in files {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            log::debug!("read {} bytes from {}", content.len(), path.display());
            inputs.extend(content.lines().map(str::to_string));
        }
        return Ok(inputs);
    }

    read_lines(io::stdin().lock()).context("Failed to read standard input")
}

/// Read all lines, dropping line terminators (including a trailing `\r`).
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}
