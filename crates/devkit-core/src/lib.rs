pub mod error;
pub mod known_hosts;
pub mod paths;
pub mod random;
pub mod template;

pub use error::{DevError, Result};
