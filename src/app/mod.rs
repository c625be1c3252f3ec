mod form;
mod session;
pub mod status;

pub use form::FormController;
pub use session::{PendingGeneration, Session, SessionSnapshot};
pub use status::{GenerationEvent, GenerationMachine, GenerationStatus};
