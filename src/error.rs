use crate::render::{self, Parts, RenderFailure};
use crate::{Category, ErrorInfo, RawCode};
use alloc::boxed::Box;
use alloc::string::String;
use once_cell::race::OnceBox;

/// An error code with optional context and description.
///
/// The message is rendered as
/// `CATEGORY[0xCODE]context description`, where `CODE` is always eight uppercase hex digits.
/// Rendering happens on the first call to [`compute_or_get`](Self::compute_or_get) (or the first
/// time the error is displayed) and the result is kept for the lifetime of the value.
///
/// Reading the fields is safe from any number of threads. Concurrent first renders are sound, but
/// each racing thread assembles its own message before one of them is kept.
pub struct Error {
    category: Category,
    code: RawCode,
    context: String,
    description: String,
    message: OnceBox<String>,
}

impl Error {
    fn from_parts(category: Category, code: RawCode, context: String, description: String) -> Self {
        Self {
            category,
            code,
            context,
            description,
            message: OnceBox::new(),
        }
    }

    /// Create an error without context or description.
    pub fn new(category: Category, code: RawCode) -> Self {
        Self::from_parts(category, code, String::new(), String::new())
    }

    /// Create an error with context.
    pub fn with_context(category: Category, code: RawCode, context: impl Into<String>) -> Self {
        Self::from_parts(category, code, context.into(), String::new())
    }

    /// Create an error with context and description.
    pub fn with_description(
        category: Category,
        code: RawCode,
        context: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::from_parts(category, code, context.into(), description.into())
    }

    /// Create an error from a catalog entry.
    pub fn from_info(category: Category, info: &ErrorInfo) -> Self {
        Self::from_parts(category, info.code, String::new(), info.description.into())
    }

    /// Create an error from a catalog entry, with context.
    pub fn from_info_with_context(
        category: Category,
        info: &ErrorInfo,
        context: impl Into<String>,
    ) -> Self {
        Self::from_parts(category, info.code, context.into(), info.description.into())
    }

    /// The error code.
    pub fn code(&self) -> RawCode {
        self.code
    }

    /// The context, or an empty string.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The description, or an empty string.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The name of the error's category.
    pub fn category(&self) -> &'static str {
        self.category.name()
    }

    /// The category tag.
    pub fn kind(&self) -> Category {
        self.category
    }

    /// Returns `true` once the message has been rendered and cached.
    pub fn is_rendered(&self) -> bool {
        self.message.get().is_some()
    }

    /// Render the message, or return the cached message if it was already rendered.
    ///
    /// If the message can't be assembled, the failure's own text is returned instead and nothing
    /// is cached, so the next call tries again.
    pub fn compute_or_get(&self) -> &str {
        self.compute_or_get_with(render::reserve)
    }

    fn compute_or_get_with<R>(&self, reserve: R) -> &str
    where
        R: FnOnce(&mut String, usize) -> Result<(), RenderFailure>,
    {
        match self.render_with(reserve) {
            Ok(message) => message,
            Err(failure) => {
                tracing::debug!(
                    category = self.category.name(),
                    code = self.code,
                    error = failure.message(),
                    "failed to render error message"
                );
                failure.message()
            }
        }
    }

    /// Like [`compute_or_get`](Self::compute_or_get), but reports the failure.
    pub fn try_render(&self) -> Result<&str, RenderFailure> {
        self.render_with(render::reserve)
    }

    fn render_with<R>(&self, reserve: R) -> Result<&str, RenderFailure>
    where
        R: FnOnce(&mut String, usize) -> Result<(), RenderFailure>,
    {
        self.message
            .get_or_try_init(|| {
                let parts = Parts {
                    category: self.category.name(),
                    code: self.code,
                    context: &self.context,
                    description: &self.description,
                };
                render::assemble(&parts, reserve).map(Box::new)
            })
            .map(|message| message.as_str())
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        Self::from_parts(
            self.category,
            self.code,
            self.context.clone(),
            self.description.clone(),
        )
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.code == other.code
            && self.context == other.context
            && self.description == other.description
    }
}

impl Eq for Error {}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Error")
            .field("category", &self.category)
            .field("code", &self.code)
            .field("context", &self.context)
            .field("description", &self.description)
            .finish()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.compute_or_get())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        let kind = if e.category == Category::SYSTEM {
            Self::from_raw_os_error(e.code as i32).kind()
        } else {
            std::io::ErrorKind::Other
        };
        Self::new(kind, e)
    }
}
