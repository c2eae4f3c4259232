pub mod dynamic;
pub mod error;
pub mod typed;

pub use dynamic::Value;
pub use error::ValueError;
pub use typed::Bridge;
