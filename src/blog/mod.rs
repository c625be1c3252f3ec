mod generator;
mod inputs;
pub mod prompt;

pub use generator::BlogGenerator;
pub use inputs::{FormField, InputParameters};
