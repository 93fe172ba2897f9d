//! Status endpoint handlers.

pub mod system;
pub mod viewer;
