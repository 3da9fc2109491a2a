//! Remote theme fetch: GET a URL, expect a theme JSON body.

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};

/// Fetch a theme from a user-supplied URL. Attempt-once: no retry, no
/// timeout beyond the client defaults. The body is shape-checked by the
/// shared validator before acceptance.
pub async fn fetch_theme(url: &str) -> Result<ThemeConfig> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ThemeError::Fetch(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ThemeError::Fetch(format!("HTTP {}", status.as_u16())));
    }
    let body = response
        .text()
        .await
        .map_err(|e| ThemeError::Fetch(e.to_string()))?;
    crate::config::theme_from_json(&body)
        .map_err(|e| ThemeError::Fetch(format!("response is not a valid theme: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_is_fetch_error() {
        let err = fetch_theme("this is not a url").await.unwrap_err();
        assert!(matches!(err, ThemeError::Fetch(_)));
    }
}
