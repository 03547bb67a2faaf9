//! SMS provider implementations.

pub(crate) mod traits;

#[cfg(feature = "aligo")]
pub mod aligo;

#[cfg(feature = "sns")]
pub mod sns;

pub use traits::Provider;
