//! Runtime configuration from command-line flags and environment variables

use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_API_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "interviewiq", version, about = "Practice interviews in your terminal")]
pub struct Settings {
    /// Base URL of the question/feedback backend
    #[arg(long, env = "INTERVIEWIQ_API_URL", default_value = DEFAULT_API_URL, value_parser = parse_api_url)]
    pub api_url: String,

    /// Directory for the log file (defaults to the user cache dir)
    #[arg(long, env = "INTERVIEWIQ_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, env = "INTERVIEWIQ_LOG", default_value = "info")]
    pub log_level: tracing::Level,

    /// Skip the startup backend health probe
    #[arg(long)]
    pub no_health_check: bool,
}

impl Settings {
    /// Resolved directory the log file is written to
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|dir| dir.join("interviewiq"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

/// Accept only absolute http(s) URLs, normalized without a trailing slash
fn parse_api_url(raw: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_api_url() {
        let settings = Settings::try_parse_from(["interviewiq", "--api-url", "https://coach.example.com/"]).unwrap();
        assert_eq!(settings.api_url, "https://coach.example.com");
        assert!(!settings.no_health_check);
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(Settings::try_parse_from(["interviewiq", "--api-url", "not a url"]).is_err());
        assert!(Settings::try_parse_from(["interviewiq", "--api-url", "ftp://coach.example.com"]).is_err());
    }

    #[test]
    fn test_log_settings() {
        let settings = Settings::try_parse_from([
            "interviewiq",
            "--log-dir",
            "/tmp/iq",
            "--log-level",
            "debug",
            "--no-health-check",
        ])
        .unwrap();
        assert_eq!(settings.log_dir(), PathBuf::from("/tmp/iq"));
        assert_eq!(settings.log_level, tracing::Level::DEBUG);
        assert!(settings.no_health_check);
    }

    #[test]
    fn test_default_url_is_valid() {
        assert_eq!(parse_api_url(DEFAULT_API_URL).unwrap(), DEFAULT_API_URL);
    }
}
