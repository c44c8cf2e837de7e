//! Status query errors.

/// Errors that can occur while querying a status provider.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Command '{program}' not found")]
    NotFound { program: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' exited with {}: {stderr}", describe_code(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command '{program}' produced output that is not valid UTF-8")]
    InvalidUtf8 { program: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
