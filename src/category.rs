/// The family an [`Error`](crate::Error) belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A Windows system error code, as returned by `GetLastError`.
    Win32,
    /// A POSIX `errno` value.
    Posix,
    /// A user-defined family, identified by name.
    Custom(&'static str),
}

impl Category {
    /// The category of the system errors on the current platform.
    #[cfg(unix)]
    pub const SYSTEM: Self = Self::Posix;

    /// The category of the system errors on the current platform.
    #[cfg(windows)]
    pub const SYSTEM: Self = Self::Win32;

    /// The name that prefixes rendered messages.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Win32 => "WIN32",
            Self::Posix => "POSIX",
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` if the code is an operating system error code.
    pub const fn is_system(&self) -> bool {
        matches!(self, Self::Win32 | Self::Posix)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Category::Win32.name(), "WIN32");
        assert_eq!(Category::Posix.name(), "POSIX");
        assert_eq!(Category::Custom("HTTP").name(), "HTTP");
        assert_eq!(Category::Custom("HTTP").to_string(), "HTTP");
    }

    #[test]
    fn system_categories() {
        assert!(Category::Win32.is_system());
        assert!(Category::Posix.is_system());
        assert!(!Category::Custom("POSIX").is_system());
        assert!(Category::SYSTEM.is_system());
    }
}
