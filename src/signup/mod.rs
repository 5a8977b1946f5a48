mod validate;

pub use validate::{is_valid_email, submit, SignupError, SignupForm, CONFIRMATION_MESSAGE};
