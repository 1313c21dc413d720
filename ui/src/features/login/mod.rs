pub mod attach;
pub mod submission;
pub mod types;

pub use attach::AttachOnce;
pub use submission::*;
pub use types::*;
