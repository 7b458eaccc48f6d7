pub mod extensions;

pub use extensions::HeaderExtensions;
