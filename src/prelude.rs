pub use crate::errors::ScoutingError;

pub type Result<T> = core::result::Result<T, ScoutingError>;
