//! Unit tests for prompt error types

#[cfg(test)]
mod tests {
    use crate::prompt::error::PromptError;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_error() {
        let error = PromptError::NotFound("code-review".to_string());
        assert_eq!(error.to_string(), "Prompt 'code-review' not found");
    }

    #[test]
    fn test_empty_name_error() {
        assert_eq!(PromptError::EmptyName.to_string(), "Prompt name cannot be empty");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let error = PromptError::Read {
            path: PathBuf::from("/prompts/a.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/prompts/a.md"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_pattern_error() {
        let source = glob::Pattern::new("[").unwrap_err();
        let error = PromptError::Pattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid ignore pattern '['"));
    }

    #[test]
    fn test_error_debug() {
        let error = PromptError::NotFound("x".to_string());
        assert!(format!("{error:?}").contains("NotFound"));
    }
}
