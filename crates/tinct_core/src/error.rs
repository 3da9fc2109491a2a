use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("store error: {0}")]
    Store(String),

    #[error("invalid theme: {0}")]
    Invalid(String),

    #[error("import error: {0}")]
    Import(String),

    #[error("share error: {0}")]
    Share(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sql(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error() {
        let err = ThemeError::Store("db locked".to_string());
        assert_eq!(err.to_string(), "store error: db locked");
    }

    #[test]
    fn test_invalid_error() {
        let err = ThemeError::Invalid("radius must be finite".to_string());
        assert_eq!(err.to_string(), "invalid theme: radius must be finite");
    }

    #[test]
    fn test_import_error() {
        let err = ThemeError::Import("not a theme file".to_string());
        assert_eq!(err.to_string(), "import error: not a theme file");
    }

    #[test]
    fn test_fetch_error() {
        let err = ThemeError::Fetch("HTTP 404".to_string());
        assert_eq!(err.to_string(), "fetch error: HTTP 404");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ThemeError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        let err = ThemeError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
