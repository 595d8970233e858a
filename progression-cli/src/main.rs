//! Progression CLI
//!
//! Presentation surface for the sequence engine. Two modes:
//! - interactive prompts when stdin is a terminal;
//! - a line-oriented JSON request/response protocol otherwise, one
//!   request per line on stdin, one response per line on stdout.
//!
//! Logging goes to stderr so stdout stays a clean report/protocol channel.

use progression::{export_filename, export_text, Progression, Renderer, Report};
use progression_core::{ParamError, ProgressionError, SequenceKind, SequenceParameters, MAX_TERMS};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the export directory from environment
fn export_dir() -> PathBuf {
    env::var("PROGRESSION_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// One generation request on the wire
#[derive(Debug, Deserialize)]
struct SequenceRequest {
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    num_terms: i64,
}

/// One response on the wire
#[derive(Debug, Serialize)]
struct SequenceResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export: Option<ExportPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ProgressionError>,
}

impl SequenceResponse {
    fn failure(error: ProgressionError) -> Self {
        Self { ok: false, report: None, export: None, error: Some(error) }
    }
}

/// Text-export payload included when the export rule fires
#[derive(Debug, Serialize)]
struct ExportPayload {
    filename: String,
    text: String,
}

/// Map a raw term count onto the validated u32 range.
///
/// The wire and prompt surfaces accept any integer, so non-positive
/// counts get the same validation message the engine would produce.
fn term_count(raw: i64) -> Result<u32, ProgressionError> {
    if raw <= 0 {
        return Err(ParamError::NonPositiveTermCount.into());
    }
    if raw > i64::from(MAX_TERMS) {
        return Err(ParamError::TermCountExceeded(MAX_TERMS).into());
    }
    Ok(raw as u32)
}

impl SequenceRequest {
    fn params(&self) -> Result<SequenceParameters, ProgressionError> {
        Ok(SequenceParameters::new(
            self.first_term,
            self.step,
            term_count(self.num_terms)?,
        ))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = APP_VERSION, "progression started");
    tracing::debug!(export_dir = %export_dir().display(), "export directory resolved");

    let engine = Progression::new();
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    tracing::debug!(interactive, "stdin probed");

    let mut reader = io::BufReader::new(stdin.lock());
    if interactive {
        run_interactive(&engine, &mut reader);
    } else {
        run_machine(&engine, &mut reader);
    }
}

// ========== Machine mode ==========

fn run_machine(engine: &Progression, reader: &mut impl BufRead) {
    tracing::info!("machine mode: waiting for JSON requests");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = process_line(engine, line);

                let response_json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize response");
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json) {
                    tracing::error!(error = %e, "failed to write response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    tracing::error!(error = %e, "failed to flush stdout");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    tracing::info!("machine mode: input closed, shutting down");
}

/// Handle one line of the wire protocol. Malformed JSON is answered with
/// a parse error instead of terminating the session.
fn process_line(engine: &Progression, line: &str) -> SequenceResponse {
    match serde_json::from_str::<SequenceRequest>(line) {
        Ok(request) => handle_request(engine, &request),
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            SequenceResponse::failure(ProgressionError::parse_error(e.to_string()))
        }
    }
}

fn handle_request(engine: &Progression, request: &SequenceRequest) -> SequenceResponse {
    let params = match request.params() {
        Ok(p) => p,
        Err(e) => return SequenceResponse::failure(e),
    };

    match engine.run(request.kind, &params) {
        Ok(report) => {
            let export = report.offers_export().then(|| ExportPayload {
                filename: export_filename(report.kind, &report.params),
                text: export_text(&report.sequence),
            });
            SequenceResponse { ok: true, report: Some(report), export, error: None }
        }
        Err(e) => SequenceResponse::failure(e),
    }
}

// ========== Interactive mode ==========

fn run_interactive(engine: &Progression, reader: &mut impl BufRead) {
    let renderer = Renderer::new();

    println!("Sequence Generator");
    println!("Generate arithmetic and geometric sequences with custom parameters.");
    println!();

    loop {
        let Some(kind) = prompt_kind(reader) else { break };
        let Some(first_term) = prompt_number(reader, "First term (a₁)") else { break };
        let step_label = match kind {
            SequenceKind::Arithmetic => "Common difference (d)",
            SequenceKind::Geometric => "Common ratio (r)",
        };
        let Some(step) = prompt_number(reader, step_label) else { break };
        let Some(raw_count) = prompt_integer(reader, "Number of terms (n)") else { break };

        let num_terms = match term_count(raw_count) {
            Ok(n) => n,
            Err(e) => {
                println!("{}", e);
                println!();
                continue;
            }
        };

        let params = SequenceParameters::new(first_term, step, num_terms);
        let report = match engine.run(kind, &params) {
            Ok(r) => r,
            Err(e) => {
                println!("{}", e);
                println!();
                continue;
            }
        };

        println!();
        println!("{}", renderer.render(&report));

        if prompt_yes_no(reader, "Show sequence in table format?") {
            println!();
            println!("{}", renderer.render_table(&report));
        }

        if report.offers_export() {
            let filename = export_filename(report.kind, &report.params);
            if prompt_yes_no(reader, &format!("Save sequence as {}?", filename)) {
                save_export(&report, &filename);
            }
        }

        println!();
    }

    tracing::info!("interactive session ended");
}

fn save_export(report: &Report, filename: &str) {
    let path = export_dir().join(filename);
    match fs::write(&path, export_text(&report.sequence)) {
        Ok(()) => println!("Saved {}", path.display()),
        Err(e) => println!("{}", ProgressionError::from(e)),
    }
}

/// Print a prompt and read one trimmed line. None on EOF.
fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}: ", prompt);
    if let Err(e) = io::stdout().flush() {
        tracing::error!(error = %e, "failed to flush stdout");
    }

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::error!(error = %e, "failed to read input");
            None
        }
    }
}

/// Choose the sequence kind. Blank line or quit ends the session.
fn prompt_kind(reader: &mut impl BufRead) -> Option<SequenceKind> {
    loop {
        let answer = prompt_line(reader, "Sequence type [arithmetic/geometric] (blank to quit)")?;
        match answer.to_lowercase().as_str() {
            "" | "q" | "quit" | "exit" => return None,
            "a" | "arithmetic" => return Some(SequenceKind::Arithmetic),
            "g" | "geometric" => return Some(SequenceKind::Geometric),
            other => println!("Unknown sequence type: {}", other),
        }
    }
}

fn prompt_number(reader: &mut impl BufRead, label: &str) -> Option<f64> {
    loop {
        let answer = prompt_line(reader, label)?;
        match answer.parse::<f64>() {
            Ok(n) => return Some(n),
            Err(_) => println!("Please enter a number"),
        }
    }
}

fn prompt_integer(reader: &mut impl BufRead, label: &str) -> Option<i64> {
    loop {
        let answer = prompt_line(reader, label)?;
        match answer.parse::<i64>() {
            Ok(n) => return Some(n),
            Err(_) => println!("Please enter a whole number"),
        }
    }
}

fn prompt_yes_no(reader: &mut impl BufRead, question: &str) -> bool {
    match prompt_line(reader, &format!("{} [y/N]", question)) {
        Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::codes;

    fn respond(line: &str) -> serde_json::Value {
        let engine = Progression::new();
        let response = process_line(&engine, line);
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn test_request_line_to_response_line() {
        let json = respond(r#"{"kind": "arithmetic", "first_term": 1.0, "step": 2.0, "num_terms": 5}"#);
        assert_eq!(json["ok"], true);
        assert_eq!(json["report"]["sequence"], serde_json::json!([1.0, 3.0, 5.0, 7.0, 9.0]));
        assert_eq!(json["report"]["sum"], 25.0);
        assert!(json.get("error").is_none());
        assert!(json.get("export").is_none());
    }

    #[test]
    fn test_geometric_request() {
        let json = respond(r#"{"kind": "geometric", "first_term": 2.0, "step": 2.0, "num_terms": 5}"#);
        assert_eq!(json["ok"], true);
        assert_eq!(json["report"]["kind"], "geometric");
        assert_eq!(json["report"]["sum"], 62.0);
    }

    #[test]
    fn test_export_payload_past_threshold() {
        let json = respond(r#"{"kind": "arithmetic", "first_term": 1.0, "step": 1.0, "num_terms": 21}"#);
        assert_eq!(json["ok"], true);
        assert_eq!(json["export"]["filename"], "arithmetic_sequence_1_1_21.txt");
        let text = json["export"]["text"].as_str().unwrap();
        assert!(text.starts_with("Term 1: 1\n"));
        assert!(text.ends_with("Term 21: 21"));
    }

    #[test]
    fn test_excess_terms_rejected_on_wire() {
        let json = respond(r#"{"kind": "arithmetic", "first_term": 1.0, "step": 1.0, "num_terms": 1001}"#);
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], codes::VALIDATION);
        assert!(json.get("report").is_none());
    }

    #[test]
    fn test_non_positive_terms_rejected_on_wire() {
        let json = respond(r#"{"kind": "geometric", "first_term": 1.0, "step": 2.0, "num_terms": -5}"#);
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], codes::VALIDATION);
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("positive integer"));
    }

    #[test]
    fn test_malformed_json_answered_with_parse_error() {
        let json = respond("not json at all");
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], codes::PARSE_ERROR);
    }
}
