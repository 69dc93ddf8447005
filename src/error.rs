use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load projects: {0}")]
    FetchFailure(#[source] Box<AdminError>),

    #[error("Failed to {action} project {project}: {source}")]
    MutationFailure {
        action: &'static str,
        project: String,
        #[source]
        source: Box<AdminError>,
    },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Nothing to change: pass --tag and/or --endpoint")]
    EmptyEdit,

    #[error("Invalid tag '{0}': use lowercase letters, digits, '-' or '_' (max 64)")]
    InvalidTag(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No directory service URL. Set PROJADM_API_URL or add api_url to ~/.config/projadm/config.toml"
    )]
    MissingApiUrl,
}

impl AdminError {
    /// Failures the project view has already shown through its notifier.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            AdminError::FetchFailure(_) | AdminError::MutationFailure { .. }
        )
    }

    pub fn mutation(action: &'static str, project: &str, source: AdminError) -> Self {
        AdminError::MutationFailure {
            action,
            project: project.to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
