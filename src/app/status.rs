use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    InProgress,
    Completed(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    Submit,
    Succeeded(String),
    Failed(String),
}

impl GenerationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InProgress => "in_progress",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
        }
    }
}

impl GenerationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Owns the current [`GenerationStatus`] and only moves it along legal edges.
#[derive(Debug, Default)]
pub struct GenerationMachine {
    status: GenerationStatus,
}

impl GenerationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> &GenerationStatus {
        &self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GenerationStatus::InProgress
    }

    pub fn transition(&mut self, event: GenerationEvent) -> Result<()> {
        debug!(
            "FSM processing event {} in state {}",
            event.name(),
            self.status.name()
        );

        let new_status = match (&self.status, event) {
            (
                GenerationStatus::Idle
                | GenerationStatus::Completed(_)
                | GenerationStatus::Failed(_),
                GenerationEvent::Submit,
            ) => GenerationStatus::InProgress,
            (GenerationStatus::InProgress, GenerationEvent::Succeeded(output)) => {
                GenerationStatus::Completed(output)
            }
            (GenerationStatus::InProgress, GenerationEvent::Failed(error)) => {
                GenerationStatus::Failed(error)
            }
            (current, event) => {
                warn!(
                    "Invalid FSM transition from {} with event {}",
                    current.name(),
                    event.name()
                );
                return Err(Error::InvalidTransition {
                    current: current.name().to_string(),
                    requested: event.name().to_string(),
                });
            }
        };

        info!(
            "FSM state transition: {} -> {}",
            self.status.name(),
            new_status.name()
        );
        self.status = new_status;
        Ok(())
    }
}
