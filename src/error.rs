use std::any::Any;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("value did not satisfy the given condition")]
    Unsatisfied,

    #[error("cannot filter an `Err` value")]
    FilteredErr,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("caught panic: {message}")]
pub struct Caught {
    message: String,
}

impl Caught {
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "opaque panic payload".to_owned()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
