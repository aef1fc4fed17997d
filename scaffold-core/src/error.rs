#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScaffoldError::Agent("test error".to_string());
        assert_eq!(err.to_string(), "Agent error: test error");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: ScaffoldError = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
