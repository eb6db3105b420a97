//! Errors reported by the operating system.

#[cfg_attr(unix, path = "unix.rs")]
#[cfg_attr(windows, path = "windows.rs")]
mod lookup_impl;

use crate::{Category, Error, RawCode};
use alloc::string::String;

/// A source of descriptions for error codes.
pub trait DescriptionLookup {
    /// The category of the errors this lookup describes.
    fn category(&self) -> Category;

    /// Describe `code`.
    ///
    /// Returns `None` if there is no text for this code.
    fn resolve(&self, code: RawCode) -> Option<String>;
}

/// Looks up descriptions with the operating system.
///
/// On unix this is `strerror_r`, on Windows `FormatMessageW`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlatformLookup;

impl DescriptionLookup for PlatformLookup {
    fn category(&self) -> Category {
        Category::SYSTEM
    }

    fn resolve(&self, code: RawCode) -> Option<String> {
        lookup_impl::describe(code)
    }
}

/// Strips one trailing line feed, then one trailing carriage return.
fn normalize(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    if text.ends_with('\r') {
        text.pop();
    }
    text
}

impl Error {
    /// Create an error for `code`, described by `lookup`.
    ///
    /// A code without a description produces an empty description.
    pub fn system_with<L>(lookup: &L, code: RawCode, context: impl Into<String>) -> Self
    where
        L: DescriptionLookup + ?Sized,
    {
        let description = match lookup.resolve(code) {
            Some(text) => normalize(text),
            None => {
                tracing::trace!(code = code, "no description for error code");
                String::new()
            }
        };
        Self::with_description(lookup.category(), code, context, description)
    }

    /// Create an error for an operating system error code.
    pub fn system(code: RawCode, context: impl Into<String>) -> Self {
        Self::system_with(&PlatformLookup, code, context)
    }

    /// Create an error from the last error the operating system reported on this thread.
    ///
    /// This is `errno` on unix and `GetLastError` on Windows.
    pub fn last_os_error(context: impl Into<String>) -> Self {
        let code = lookup_impl::last_error();
        Self::system(code, context)
    }

    /// Create an error from an I/O error.
    ///
    /// I/O errors without an OS error code are reported in the `IO` category, with the I/O error's
    /// text as description.
    #[cfg(feature = "std")]
    pub fn from_io_error(error: &std::io::Error, context: impl Into<String>) -> Self {
        match error.raw_os_error() {
            Some(code) => Self::system(code as RawCode, context),
            None => Self::with_description(Category::Custom("IO"), 0, context, error.to_string()),
        }
    }
}
