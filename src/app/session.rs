use super::{FormController, GenerationStatus};
use crate::{
    Result,
    blog::InputParameters,
    config::Config,
    render::{Clipboard, ResultView, ViewMode},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// The whole mutable state behind the page: form, status and result view.
#[derive(Debug)]
pub struct Session {
    form: FormController,
    view: ResultView,
    generation_id: Option<Uuid>,
    updated_at: DateTime<Utc>,
}

/// A submission accepted by [`Session::submit`], waiting for its outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub id: Uuid,
    pub inputs: InputParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub inputs: InputParameters,
    pub status: GenerationStatus,
    pub output: String,
    pub error: Option<String>,
    pub can_submit: bool,
    pub is_generating: bool,
    pub view_mode: ViewMode,
    pub copied: bool,
    pub generation_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(form: FormController, view: ResultView) -> Self {
        Self {
            form,
            view,
            generation_id: None,
            updated_at: Utc::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            FormController::with_default_image(config.form.default_image_link.clone()),
            ResultView::new(Duration::from_millis(config.render.copy_ack_ms)),
        )
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn generation_id(&self) -> Option<Uuid> {
        self.generation_id
    }

    /// Stores the submitted field values and, when submission is enabled,
    /// moves to `InProgress` before any outbound call is made.
    pub fn submit(&mut self, inputs: InputParameters) -> Option<PendingGeneration> {
        if self.form.is_generating() {
            warn!("Submission refused: a generation is already in progress");
            return None;
        }

        self.form.set_inputs(inputs);
        self.touch();

        let inputs = self.form.begin_submit()?;
        let id = Uuid::new_v4();
        self.generation_id = Some(id);
        info!("Generation {} started for keyword: {}", id, inputs.keyword);

        Some(PendingGeneration { id, inputs })
    }

    /// Records field values without submitting. Allowed in any state; a
    /// running generation keeps the inputs it started with.
    pub fn edit_fields(&mut self, inputs: InputParameters) {
        self.form.set_inputs(inputs);
        self.touch();
    }

    pub fn finish(&mut self, id: Uuid, result: Result<String>) {
        if self.generation_id != Some(id) {
            warn!("Ignoring result of unknown generation {}", id);
            return;
        }

        let succeeded = result.is_ok();
        match self.form.complete(result) {
            Ok(()) => info!("Generation {} finished (success: {})", id, succeeded),
            Err(e) => warn!("Could not record result of generation {}: {}", id, e),
        }
        self.touch();
    }

    /// Purely local: never touches the stored output.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.set_mode(mode);
    }

    pub fn copy_output(&mut self, clipboard: &dyn Clipboard) -> Result<bool> {
        self.view.copy(self.form.output(), clipboard)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            inputs: self.form.inputs().clone(),
            status: self.form.status().clone(),
            output: self.form.output().to_string(),
            error: self.form.error().map(str::to_string),
            can_submit: self.form.can_submit(),
            is_generating: self.form.is_generating(),
            view_mode: self.view.mode(),
            copied: self.view.is_copied(),
            generation_id: self.generation_id,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
