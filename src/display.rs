use std::fmt::Display;
use std::time::Duration;
use crate::client::QueryOutcome;
use crate::params::QueryParams;
use crate::protocol::{ResourceRecord, COLUMN_SEPARATOR};

pub fn render_request(params: &QueryParams) -> Vec<String> {
    vec![
        format!("DnsClient sending request for {}", params.name),
        format!("Server: {}", params.server),
        format!("Request type: {}", params.query_type),
    ]
}

/// Lists answer and additional records. Authority records are decoded but
/// not listed.
pub fn render_outcome(outcome: &QueryOutcome) -> Vec<String> {
    let response = &outcome.response;
    let auth = if response.is_authoritative() { "auth" } else { "nonauth" };
    let mut lines = vec![format!("Response received after {} seconds and {} retries",
                                 format_seconds(outcome.elapsed), outcome.retries)];
    let answers = response.get_answers();
    if answers.is_empty() {
        lines.push("NOTFOUND".to_string());
    } else {
        lines.push(format!("***Answer Section ({} records)***", answers.len()));
        lines.extend(answers.iter().map(|r| render_record(r, auth)));
    }
    let additionals = response.get_additionals();
    if !additionals.is_empty() {
        lines.push(format!("***Additional Section ({} records)***", additionals.len()));
        lines.extend(additionals.iter().map(|r| render_record(r, auth)));
    }
    lines
}

pub fn render_error<E: Display + ?Sized>(error: &E) -> String {
    format!("ERROR{}{}", COLUMN_SEPARATOR, error)
}

fn render_record(record: &ResourceRecord, auth: &str) -> String {
    format!("{}{}{}", record, COLUMN_SEPARATOR, auth)
}

/// Seconds with at most four decimals and no trailing zeros.
fn format_seconds(elapsed: Duration) -> String {
    let text = format!("{:.4}", elapsed.as_secs_f64());
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
