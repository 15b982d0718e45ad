pub use crate::extensions::Extension;
pub use crate::models::*;
