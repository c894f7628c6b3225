use thiserror::Error;

/// Failures in browser glue. Never shown to the user; callers log and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Document is not available")]
    NoDocument,

    #[error("No element with id '{0}'")]
    ElementNotFound(String),

    #[error("Event carried no files")]
    NoFiles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UiError::ElementNotFound("services".to_string()).to_string(),
            "No element with id 'services'"
        );
        assert_eq!(UiError::NoFiles.to_string(), "Event carried no files");
    }
}
