/*!
 * Process List Loader
 * Parses `name,priority,burst` lines into validated process specs
 */

use crate::core::types::{Priority, Timestamp};
use crate::scheduler::{ProcessSpec, TimeQuantum};
use log::info;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Loader errors; every variant is fatal on first occurrence.
/// No recovery or skip-and-continue: a malformed input aborts the run
/// before any simulation happens.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum LoaderError {
    #[error("Unable to read process file '{path}': {reason}")]
    #[diagnostic(
        code(loader::unreadable_file),
        help("Check that the path exists and is readable.")
    )]
    UnreadableFile { path: String, reason: String },

    #[error("Error parsing line {line}: {reason} (line content: '{content}')")]
    #[diagnostic(
        code(loader::parse),
        help("Process lines are 'name,priority,burst' with integer priority and burst.")
    )]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("No valid processes found in the input")]
    #[diagnostic(
        code(loader::empty_process_list),
        help("Provide at least one 'name,priority,burst' line.")
    )]
    EmptyProcessList,

    #[error("Invalid time quantum '{value}': must be a positive integer")]
    #[diagnostic(
        code(loader::invalid_quantum),
        help("Pass a whole number of ticks >= 1.")
    )]
    InvalidQuantum { value: String },
}

/// Parse one non-blank process line (`name,priority,burst`)
fn parse_line(raw: &str, number: usize) -> Result<ProcessSpec, LoaderError> {
    let parse_error = |reason: &str| LoaderError::Parse {
        line: number,
        content: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = raw.split(',');

    let name = fields
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| parse_error("missing process name"))?;
    let priority = fields
        .next()
        .ok_or_else(|| parse_error("missing priority value"))?;
    let burst = fields
        .next()
        .ok_or_else(|| parse_error("missing burst time value"))?;
    if fields.next().is_some() {
        return Err(parse_error("too many fields in process line"));
    }

    let priority: Priority = priority
        .trim()
        .parse()
        .map_err(|_| parse_error("priority is not a non-negative integer"))?;
    let burst: Timestamp = burst
        .trim()
        .parse()
        .map_err(|_| parse_error("burst time is not a non-negative integer"))?;

    Ok(ProcessSpec {
        name: name.to_string(),
        priority,
        burst,
    })
}

/// Parse a whole process list. Blank lines are skipped; line numbers in
/// errors are 1-based and count blank lines.
pub fn parse_process_list(input: &str) -> Result<Vec<ProcessSpec>, LoaderError> {
    let mut specs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        specs.push(parse_line(raw, idx + 1)?);
    }

    if specs.is_empty() {
        return Err(LoaderError::EmptyProcessList);
    }
    Ok(specs)
}

/// Read and parse a process file
pub fn load_process_file(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, LoaderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| LoaderError::UnreadableFile {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let specs = parse_process_list(&text)?;
    info!("Loaded {} processes from {}", specs.len(), path.display());
    Ok(specs)
}

/// Parse the time quantum argument; fatal if non-numeric or below 1
pub fn parse_quantum(value: &str) -> Result<TimeQuantum, LoaderError> {
    let invalid = || LoaderError::InvalidQuantum {
        value: value.to_string(),
    };

    let ticks: Timestamp = value.trim().parse().map_err(|_| invalid())?;
    TimeQuantum::new(ticks).map_err(|_| invalid())
}
