pub mod errors;
pub mod types;

pub use errors::{BridgeError, RegistryError, ToolkitError};
pub use types::{Rect, WindowStats};

pub type Result<T> = std::result::Result<T, BridgeError>;
