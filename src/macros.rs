/// Declare a named [`ErrorInfo`](crate::ErrorInfo) constant.
///
/// ```
/// os_error::declare_error_info!(pub FILE_NOT_FOUND, 2, "file not found");
///
/// assert_eq!(FILE_NOT_FOUND.code, 2);
/// ```
#[macro_export]
macro_rules! declare_error_info {
    ($(#[$attr:meta])* $vis:vis $name:ident, $code:expr, $description:expr $(,)?) => {
        $(#[$attr])*
        $vis const $name: $crate::ErrorInfo = $crate::ErrorInfo::new($code, $description);
    };
}

/// Return early with an error if a condition holds.
///
/// The error is converted with [`From`], like `?` does.
#[macro_export]
macro_rules! bail_if {
    ($condition:expr, $error:expr $(,)?) => {
        if $condition {
            return ::core::result::Result::Err(::core::convert::From::from($error));
        }
    };
}

/// Create an [`Error`](crate::Error) from the last error the operating system reported on this
/// thread.
#[macro_export]
macro_rules! system_error {
    ($context:expr) => {
        $crate::Error::last_os_error($context)
    };
}

/// Create an [`Error`](crate::Error) from `errno`.
#[cfg(unix)]
#[macro_export]
macro_rules! posix_error {
    ($context:expr) => {
        $crate::system_error!($context)
    };
}

/// Create an [`Error`](crate::Error) from `GetLastError`.
#[cfg(windows)]
#[macro_export]
macro_rules! win32_error {
    ($context:expr) => {
        $crate::system_error!($context)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Category, Error};

    fn check(limit: u32, value: u32) -> Result<u32, Error> {
        crate::bail_if!(value > limit, Error::with_context(Category::Custom("RANGE"), value, "check"));
        Ok(value)
    }

    #[test]
    fn bail_if_returns_error() {
        assert_eq!(check(10, 3), Ok(3));
        let e = check(10, 11).unwrap_err();
        assert_eq!(e.compute_or_get(), "RANGE[0x0000000B]check");
    }

    #[cfg(feature = "std")]
    #[test]
    fn bail_if_converts() {
        fn run() -> std::io::Result<()> {
            crate::bail_if!(
                true,
                Error::with_description(Category::SYSTEM, 2, "read /etc/app.conf", "missing")
            );
            Ok(())
        }
        let e = run().unwrap_err();
        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(
            e.to_string(),
            format!("{}[0x00000002]read /etc/app.conf missing", Category::SYSTEM)
        );
    }
}
