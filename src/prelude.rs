pub use crate::constants::*;
pub use crate::core::{AttributeKey, CacheDirective, HeaderName, Registry};
pub use crate::error::RegistryError;
#[cfg(feature = "actix")]
pub use crate::middleware::HeaderExtensions;
pub use crate::utils::BufferWriter;
