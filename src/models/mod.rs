pub mod forms;

pub use forms::{ContactForm, FieldError, JoinForm};
