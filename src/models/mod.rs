pub mod endpoint;
pub mod slack;

pub use endpoint::*;
pub use slack::*;
