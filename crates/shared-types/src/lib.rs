pub mod error;
pub mod recovery;

pub use error::*;
pub use recovery::*;
