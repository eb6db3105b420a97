use crate::RawCode;

/// A named, reusable error code and its description.
///
/// Intended for catalogs of `const` items, see [`declare_error_info!`](crate::declare_error_info).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error code.
    pub code: RawCode,
    /// A description of the error.
    pub description: &'static str,
}

impl ErrorInfo {
    /// Create a catalog entry.
    pub const fn new(code: RawCode, description: &'static str) -> Self {
        Self { code, description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::declare_error_info!(FILE_NOT_FOUND, 2, "file not found");

    #[test]
    fn declared_constant() {
        assert_eq!(FILE_NOT_FOUND.code, 2);
        assert_eq!(FILE_NOT_FOUND.description, "file not found");
        assert_eq!(FILE_NOT_FOUND, ErrorInfo::new(2, "file not found"));
    }

    #[test]
    fn aggregate() {
        const ACCESS_DENIED: ErrorInfo = ErrorInfo {
            code: 5,
            description: "access is denied",
        };
        assert_eq!(ACCESS_DENIED.code, 5);
    }
}
