#[macro_use]
mod macros;

pub mod constants;
pub mod core;
pub mod error;
#[cfg(feature = "actix")]
pub mod middleware;
pub mod prelude;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::{
    AttributeKey, CacheDirective, DirectiveArgument, Entry, HeaderName, Namespace, Registry,
};
pub use error::RegistryError;
#[cfg(feature = "actix")]
pub use middleware::HeaderExtensions;
pub use utils::{join_tokens, BufferWriter};
