//! Share links: a theme plus display name packed into a URL query parameter.
//!
//! The payload is `{name, config, timestamp}` JSON, Base64-encoded, carried
//! in the `theme` parameter. Parsing treats every failure as "no theme found"
//! and returns `None`; nothing here throws outward.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};

/// Query parameter carrying the encoded theme.
pub const THEME_PARAM: &str = "theme";

/// Default base URL for generated links.
pub const DEFAULT_BASE_URL: &str = "https://tinct.dev/";

/// The payload a share link carries. `timestamp` is recorded at encode time
/// but never consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedTheme {
    #[serde(default = "default_share_name")]
    pub name: String,
    pub config: ThemeConfig,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

fn default_share_name() -> String {
    "Imported theme".to_string()
}

/// Encode a theme and name as the Base64 payload of a share link.
pub fn encode_share(config: &ThemeConfig, name: &str) -> Result<String> {
    let payload = SharedTheme {
        name: name.to_string(),
        config: config.clone(),
        timestamp: Some(Utc::now()),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(STANDARD.encode(json))
}

/// Build a full shareable URL for a theme.
pub fn share_url(config: &ThemeConfig, name: &str, base_url: &str) -> Result<String> {
    let mut url =
        Url::parse(base_url).map_err(|e| ThemeError::Share(format!("bad base url: {e}")))?;
    let encoded = encode_share(config, name)?;
    url.query_pairs_mut().append_pair(THEME_PARAM, &encoded);
    Ok(url.to_string())
}

/// Parse a share link back into its payload.
///
/// Absent-result contract: missing parameter, bad Base64, bad JSON, or a
/// config that fails validation all yield `None` (logged at debug level).
pub fn parse_shared(link: &str) -> Option<SharedTheme> {
    let url = match Url::parse(link) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!(error = %e, "share link is not a url");
            return None;
        }
    };
    let encoded = url
        .query_pairs()
        .find(|(k, _)| k == THEME_PARAM)
        .map(|(_, v)| v.into_owned())?;
    let json = match STANDARD.decode(encoded.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "share payload is not base64");
            return None;
        }
    };
    let shared: SharedTheme = match serde_json::from_slice(&json) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(error = %e, "share payload is not a theme");
            return None;
        }
    };
    if let Err(e) = shared.config.validate() {
        tracing::debug!(error = %e, "shared theme failed validation");
        return None;
    }
    Some(shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_round_trip() {
        let mut config = ThemeConfig::default();
        config.accent = "326 100% 74%".to_string();
        let link = share_url(&config, "Night Owl", DEFAULT_BASE_URL).unwrap();
        let shared = parse_shared(&link).unwrap();
        assert_eq!(shared.name, "Night Owl");
        assert_eq!(shared.config, config);
        assert!(shared.timestamp.is_some());
    }

    #[test]
    fn missing_parameter_is_none() {
        assert!(parse_shared("https://tinct.dev/?other=1").is_none());
        assert!(parse_shared("https://tinct.dev/").is_none());
    }

    #[test]
    fn not_a_url_is_none() {
        assert!(parse_shared("not a url at all").is_none());
    }

    #[test]
    fn bad_base64_is_none() {
        assert!(parse_shared("https://tinct.dev/?theme=%21%21%21").is_none());
    }

    #[test]
    fn missing_radius_is_none() {
        // A payload whose config lacks the radius field
        let payload = r#"{"name":"x","config":{
            "primary":"0 0% 0%","secondary":"0 0% 0%","accent":"0 0% 0%",
            "destructive":"0 0% 0%","background":"0 0% 0%","foreground":"0 0% 0%",
            "muted":"0 0% 0%","border":"0 0% 0%"}}"#;
        let link = format!("https://tinct.dev/?theme={}", STANDARD.encode(payload));
        assert!(parse_shared(&link).is_none());
    }

    #[test]
    fn invalid_radius_is_none() {
        let mut config = ThemeConfig::default();
        config.radius = -1.0;
        let payload = serde_json::json!({"name": "x", "config": config}).to_string();
        let link = format!("https://tinct.dev/?theme={}", STANDARD.encode(payload));
        assert!(parse_shared(&link).is_none());
    }

    #[test]
    fn missing_name_gets_default() {
        let payload =
            serde_json::json!({"config": ThemeConfig::default()}).to_string();
        let link = format!("https://tinct.dev/?theme={}", STANDARD.encode(payload));
        let shared = parse_shared(&link).unwrap();
        assert_eq!(shared.name, "Imported theme");
        assert!(shared.timestamp.is_none());
    }

    #[test]
    fn bad_base_url_is_share_error() {
        let err = share_url(&ThemeConfig::default(), "x", "::not a url::").unwrap_err();
        assert!(err.to_string().contains("share error"));
    }
}
