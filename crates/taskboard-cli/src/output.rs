use serde::Serialize;
use std::io::Write;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON envelope for every command: `data` on success, `error` on failure.
#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: API_VERSION,
            data: Some(data),
            error: None,
        }
    }
}

impl CliResponse<()> {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            api_version: API_VERSION,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Writes the envelope as one line. A payload that fails to encode is
/// reported as a failure envelope instead.
fn write_response<T: Serialize>(out: &mut impl Write, response: &CliResponse<T>) {
    let line = serde_json::to_string(response).or_else(|e| {
        serde_json::to_string(&CliResponse::failed(format!(
            "failed to encode response: {}",
            e
        )))
    });
    // Nothing useful can be done if stdout or stderr is closed.
    if let Ok(line) = line {
        let _ = writeln!(out, "{}", line);
    }
}

pub fn output_success<T: Serialize>(data: T) {
    write_response(&mut std::io::stdout().lock(), &CliResponse::ok(data));
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    output_success(ListResponse::from(items));
}

/// Prints the failure envelope to stderr and exits with status 1.
pub fn output_error(message: &str) -> ! {
    write_response(&mut std::io::stderr().lock(), &CliResponse::failed(message));
    std::process::exit(1);
}
