pub mod cli;

pub use cli::{CliConfig, Command};

use crate::utils::error::{Result, TdmError};
use crate::utils::validation;

/// Environment variable carrying the results API base URL.
pub const BASE_URL_VAR: &str = "TDM_API_BASE_URL";

/// Value baked into the binary when the variable is set at compile time.
/// Takes priority over the process environment, like a bundler-injected
/// constant would.
const BAKED_BASE_URL: Option<&str> = option_env!("TDM_API_BASE_URL");

/// Dev fallback used only by [`BaseUrl::resolve_or_default`].
pub const DEV_FALLBACK_URL: &str = "http://localhost:3000";

/// Resolved API base URL. Non-empty, trimmed, no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Resolves the base URL once, fail-fast. Candidates in priority order:
    /// an explicit override (CLI), the compile-time constant, then the
    /// process environment (after loading `.env` through dotenvy).
    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();
        let env_value = std::env::var(BASE_URL_VAR).ok();
        resolve_from(&[
            ("--base-url", override_url),
            ("compile-time TDM_API_BASE_URL", BAKED_BASE_URL),
            ("env TDM_API_BASE_URL", env_value.as_deref()),
        ])
    }

    /// Lazy variant for dev tooling: same candidate chain, but falls back to
    /// [`DEV_FALLBACK_URL`] instead of failing when nothing is configured.
    pub fn resolve_or_default() -> Self {
        dotenvy::dotenv().ok();
        let env_value = std::env::var(BASE_URL_VAR).ok();
        let candidates = [
            ("compile-time TDM_API_BASE_URL", BAKED_BASE_URL),
            ("env TDM_API_BASE_URL", env_value.as_deref()),
        ];
        match first_non_empty(&candidates).map(normalize) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                tracing::warn!("configured base URL rejected ({}), using {}", e, DEV_FALLBACK_URL);
                BaseUrl(DEV_FALLBACK_URL.to_string())
            }
            None => {
                tracing::warn!("{} not set, using {}", BASE_URL_VAR, DEV_FALLBACK_URL);
                BaseUrl(DEV_FALLBACK_URL.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Composes an endpoint URL. `path` must start with `/`.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn first_non_empty<'a>(candidates: &[(&str, Option<&'a str>)]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|(_, value)| value.map(str::trim).filter(|v| !v.is_empty()))
}

fn normalize(raw: &str) -> Result<BaseUrl> {
    let cleaned = raw.trim().trim_end_matches('/');
    validation::validate_url("base_url", cleaned)?;
    Ok(BaseUrl(cleaned.to_string()))
}

fn resolve_from(candidates: &[(&str, Option<&str>)]) -> Result<BaseUrl> {
    match first_non_empty(candidates) {
        Some(raw) => normalize(raw),
        None => {
            // Dump every candidate's raw value so the operator can see which
            // source was expected to provide it.
            for (name, value) in candidates {
                tracing::error!("base URL candidate {}: {}", name, value.unwrap_or("<unset>"));
            }
            Err(TdmError::Config {
                message: format!(
                    "{} n'est pas définie. Ajoutez-la dans votre fichier .env puis relancez l'application.",
                    BASE_URL_VAR
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_trailing_slashes() {
        let url = resolve_from(&[("a", Some("http://api.example.org///"))]).unwrap();
        assert_eq!(url.as_str(), "http://api.example.org");
    }

    #[test]
    fn trims_whitespace_before_normalizing() {
        let url = resolve_from(&[("a", Some("  http://api.example.org/  "))]).unwrap();
        assert_eq!(url.as_str(), "http://api.example.org");
    }

    #[test]
    fn first_candidate_wins() {
        let url = resolve_from(&[
            ("a", Some("http://first.example.org")),
            ("b", Some("http://second.example.org")),
        ])
        .unwrap();
        assert_eq!(url.as_str(), "http://first.example.org");
    }

    #[test]
    fn unset_and_blank_candidates_are_skipped() {
        let url = resolve_from(&[
            ("a", None),
            ("b", Some("   ")),
            ("c", Some("http://third.example.org")),
        ])
        .unwrap();
        assert_eq!(url.as_str(), "http://third.example.org");
    }

    #[test]
    fn all_empty_candidates_fail_with_config_error() {
        let err = resolve_from(&[("a", None), ("b", Some("")), ("c", Some("  "))]).unwrap_err();
        match err {
            TdmError::Config { message } => assert!(message.contains(BASE_URL_VAR)),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_http_candidate() {
        let err = resolve_from(&[("a", Some("ftp://api.example.org"))]).unwrap_err();
        assert!(matches!(err, TdmError::InvalidConfigValue { .. }));
    }

    #[test]
    fn join_composes_endpoint_urls() {
        let url = resolve_from(&[("a", Some("http://api.example.org/"))]).unwrap();
        assert_eq!(url.join("/matches"), "http://api.example.org/matches");
        assert_eq!(url.join("/matches/42"), "http://api.example.org/matches/42");
    }
}
