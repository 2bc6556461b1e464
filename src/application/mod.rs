mod application;
pub mod data;

pub use application::{Application, ApplicationError};
