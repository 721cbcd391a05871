//! WebServer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartup { address: String, message: String },

    #[error("Settings file error at {path}: {message}")]
    SettingsFile { path: String, message: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] SharedError),

    #[error("Response building error: {0}")]
    ResponseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn settings_file(path: &std::path::Path, message: impl ToString) -> Self {
        WebServerError::SettingsFile {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
