pub mod attribute;
pub mod cache;
pub mod header;
pub mod registry;

pub use attribute::AttributeKey;
pub use cache::{CacheDirective, DirectiveArgument};
pub use header::HeaderName;
pub use registry::{Entry, Namespace, Registry};
