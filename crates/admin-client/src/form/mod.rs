pub(crate) mod form_controller;
pub(crate) mod form_state;

pub use form_controller::FormController;
pub use form_state::{FormMode, FormState, SubmitOutcome};
