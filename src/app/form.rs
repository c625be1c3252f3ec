use super::status::{GenerationEvent, GenerationMachine, GenerationStatus};
use crate::{
    Result,
    blog::{FormField, InputParameters},
};
use tracing::debug;

/// Field values plus generation status for the single form on the page.
#[derive(Debug, Default)]
pub struct FormController {
    inputs: InputParameters,
    machine: GenerationMachine,
}

impl FormController {
    pub fn new(inputs: InputParameters) -> Self {
        Self {
            inputs,
            machine: GenerationMachine::new(),
        }
    }

    /// Empty form except for the pre-filled image link.
    pub fn with_default_image(image_link: impl Into<String>) -> Self {
        Self::new(InputParameters {
            image_link: image_link.into(),
            ..InputParameters::default()
        })
    }

    pub fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    pub fn status(&self) -> &GenerationStatus {
        self.machine.current_state()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.inputs.set(field, value.into());
    }

    pub fn set_inputs(&mut self, inputs: InputParameters) {
        self.inputs = inputs;
    }

    pub fn can_submit(&self) -> bool {
        self.inputs.is_complete() && !self.machine.is_in_progress()
    }

    pub fn is_generating(&self) -> bool {
        self.machine.is_in_progress()
    }

    /// Moves to `InProgress` and hands back the inputs to generate from.
    /// Returns `None` when submission is currently disabled.
    pub fn begin_submit(&mut self) -> Option<InputParameters> {
        if !self.can_submit() {
            debug!("Submit ignored: form incomplete or generation in progress");
            return None;
        }

        self.machine.transition(GenerationEvent::Submit).ok()?;
        Some(self.inputs.clone())
    }

    /// Applies the outcome of the outbound call, replacing the status wholesale.
    pub fn complete(&mut self, result: Result<String>) -> Result<()> {
        let event = match result {
            Ok(output) => GenerationEvent::Succeeded(output),
            Err(e) => GenerationEvent::Failed(e.user_message()),
        };
        self.machine.transition(event)
    }

    /// Generated HTML, or `""` unless the last generation completed.
    pub fn output(&self) -> &str {
        match self.status() {
            GenerationStatus::Completed(output) => output,
            _ => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.status() {
            GenerationStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}
