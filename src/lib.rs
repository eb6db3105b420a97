//! Operating system error codes with context and a lazily rendered message.
//!
//! ```
//! use os_error::{Category, Error};
//!
//! let e = Error::with_description(Category::Posix, 2, "open config", "No such file or directory");
//! assert_eq!(e.compute_or_get(), "POSIX[0x00000002]open config No such file or directory");
//! ```
#![cfg(any(unix, windows))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

mod category;
mod error;
mod info;
mod render;
pub mod system;

pub use category::Category;
pub use error::Error;
pub use info::ErrorInfo;
pub use render::RenderFailure;

/// An error code, as reported by the operating system.
///
/// POSIX `errno` values are stored bit for bit.
pub type RawCode = u32;
