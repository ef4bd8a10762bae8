use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop a generation run before any artifact is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid model name '{name}'")]
    #[diagnostic(
        code(crud::invalid_name),
        help("{reason}. Use a PascalCase name such as 'Post' or 'BlogPost'.")
    )]
    InvalidName { name: String, reason: String },

    #[error("table '{table}' does not exist")]
    #[diagnostic(
        code(crud::table_not_found),
        help("model '{model}' maps to table '{table}'; add the table to the schema snapshot or check the model name")
    )]
    TableNotFound { model: String, table: String },

    #[error("{message}")]
    #[diagnostic(code(crud::invalid_input))]
    InvalidInput { message: String },
}

impl Error {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn table_not_found(model: impl Into<String>, table: impl Into<String>) -> Self {
        Error::TableNotFound {
            model: model.into(),
            table: table.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::invalid_name("9Lives", "name must start with a letter").to_string(),
            "invalid model name '9Lives'"
        );
        assert_eq!(
            Error::table_not_found("Post", "posts").to_string(),
            "table 'posts' does not exist"
        );
        assert_eq!(
            Error::invalid_input("table 'posts' has no columns").to_string(),
            "table 'posts' has no columns"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::table_not_found("Post", "posts");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("crud::table_not_found")
        );
    }
}
