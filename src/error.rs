use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to the user whenever a blog generation fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate blog content. Please check your API key and network.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error("FSM error: {0}")]
    Fsm(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn fsm(msg: impl Into<String>) -> Self {
        Self::Fsm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The single user-facing failure every outbound-call error collapses into.
    pub fn generation_failed() -> Self {
        Self::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string())
    }

    /// Message suitable for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::GenerationFailed(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
