pub mod error;
pub mod health;
pub mod items;

pub use error::{AppError, RequestError};
