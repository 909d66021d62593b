//! Error types for results rendering.
//!
//! [`RenderError`] wraps the template engine's failures so the public API
//! does not expose minijinja types.

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    #[error("template error: {0}")]
    TemplateError(String),

    /// Template not registered with the renderer.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A record could not be turned into template values.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Other engine failure.
    #[error("{0}")]
    OperationError(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_template() {
        let err = RenderError::TemplateNotFound("result-item".to_string());
        assert!(err.to_string().contains("template not found"));
        assert!(err.to_string().contains("result-item"));
    }

    #[test]
    fn syntax_error_maps_to_template_error() {
        let env = minijinja::Environment::new();
        let err: RenderError = env.render_str("{{ title", ()).unwrap_err().into();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }

    #[test]
    fn missing_template_maps_to_not_found() {
        let env = minijinja::Environment::new();
        let err: RenderError = env.get_template("nope").unwrap_err().into();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }
}
