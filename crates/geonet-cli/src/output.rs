use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Analysis result together with when it started and how long it took
#[derive(Serialize)]
pub struct TimedReport<T: Serialize> {
    #[serde(flatten)]
    pub report: T,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Run an analysis, recording its wall-clock duration in the report
pub fn timed<T, F>(analysis: F) -> anyhow::Result<TimedReport<T>>
where
    T: Serialize,
    F: FnOnce() -> anyhow::Result<T>,
{
    let started_at = Utc::now();
    let clock = Instant::now();
    let report = analysis()?;
    let elapsed_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::debug!(elapsed_ms, "analysis finished");
    Ok(TimedReport {
        report,
        started_at,
        elapsed_ms,
    })
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Outputs an error response to stderr and terminates the process.
///
/// Always exits with code 1 so shell scripts and CI pipelines see the failure.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}
