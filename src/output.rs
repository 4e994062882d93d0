//! Output rendering for line statuses.
//!
//! Supports a colorized aligned table and a pretty-printed JSON document,
//! both built from the same name/status transforms.

use serde::Serialize;

use crate::error::Result;
use crate::model::{LineItem, OutputLine, OutputResponse};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Minimum name-column width, the header "Linha".
const MIN_NAME_WIDTH: usize = 5;

/// Maps the API's Portuguese color tag to an ANSI escape. Unknown tags
/// render unstyled.
pub fn status_color(status_color: &str) -> &'static str {
    match status_color.to_lowercase().as_str() {
        "verde" => GREEN,
        "amarelo" => YELLOW,
        "vermelho" => RED,
        "cinza" => DIM,
        _ => RESET,
    }
}

/// Extracts the color name after the last `-` and title-cases it
/// (`"Linha 1-Azul"` → `"Azul"`). Input without a `-` is one segment.
pub fn format_line_name(line: &str) -> String {
    let name = line.rsplit('-').next().unwrap_or(line).trim();

    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Trims the status text and folds the API's plural phrasings into their
/// singular canonical forms. Anything else passes through unchanged.
pub fn normalize_status(status: &str) -> String {
    let status = status.trim();
    match status.to_lowercase().as_str() {
        "operações encerradas" => "Operação Encerrada".to_string(),
        "operações normais" => "Operação Normal".to_string(),
        _ => status.to_string(),
    }
}

/// Renders the aligned, colorized table: bold header, divider, one row per
/// line with the status colored by severity.
pub fn render_table(lines: &[LineItem]) -> String {
    let width = lines
        .iter()
        .map(|l| format_line_name(&l.line).chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut out = String::new();
    out.push_str(&format!("{BOLD}{:<width$}  Status{RESET}\n", "Linha"));
    out.push_str(&"-".repeat(width + 2 + 20));
    out.push('\n');

    for line in lines {
        let name = format_line_name(&line.line);
        let status = normalize_status(&line.status);
        let color = status_color(&line.status_color);
        out.push_str(&format!("{name:<width$}  {color}{status}{RESET}\n"));
    }

    out
}

/// Renders the JSON document: `{code, data, message}` with each line mapped
/// through the same transforms as the table, indented with 4 spaces.
pub fn render_json(lines: &[LineItem]) -> Result<String> {
    let data: Vec<OutputLine> = lines
        .iter()
        .map(|line| OutputLine {
            line: format_line_name(&line.line),
            status: normalize_status(&line.status),
        })
        .collect();

    let output = OutputResponse {
        code: 200,
        data,
        message: "success".to_string(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    output.serialize(&mut ser)?;

    Ok(String::from_utf8(buf).expect("render_json: serializer emitted invalid UTF-8"))
}
