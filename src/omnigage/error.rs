use std::{fmt, io, path::PathBuf};

use reqwest::StatusCode;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Io(io::Error),
    Serde(serde_json::Error),
    InvalidUrl(String),
    FileNotFound(PathBuf),
    UnsupportedMedia(String),
    Status {
        status: StatusCode,
        body: String,
    },
    MissingField(&'static str),
    MissingRelationship {
        resource: &'static str,
        relationship: &'static str,
    },
    StorageUpload {
        status: StatusCode,
        body: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ApiError::Io(e) => write!(f, "I/O error: {}", e),
            ApiError::Serde(e) => write!(f, "Invalid JSON: {}", e),
            ApiError::InvalidUrl(e) => write!(f, "{}", e),
            ApiError::FileNotFound(path) => write!(f, "File {} not found.", path.display()),
            ApiError::UnsupportedMedia(name) => {
                write!(f, "Only WAV or MP3 files accepted, got {}.", name)
            }
            ApiError::Status { status, body } => {
                write!(f, "API responded with {}: {}", status, body)
            }
            ApiError::MissingField(field) => write!(f, "Response is missing `{}`", field),
            ApiError::MissingRelationship {
                resource,
                relationship,
            } => write!(
                f,
                "Cannot serialize {}: relationship `{}` has no id yet",
                resource, relationship
            ),
            ApiError::StorageUpload { status, body } => {
                write!(f, "Storage upload failed with {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Io(e) => Some(e),
            ApiError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<io::Error> for ApiError {
    fn from(err: io::Error) -> Self {
        ApiError::Io(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serde(err)
    }
}
