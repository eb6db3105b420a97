//! Assembly of the rendered message.

use crate::RawCode;
use alloc::string::String;
use core::mem::size_of;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Number of hex digits used for a code.
const CODE_DIGITS: usize = 2 * size_of::<RawCode>();

const PREFIX: &str = "[0x";
const SUFFIX: &str = "]";

/// A failure to assemble a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderFailure {
    /// The message length does not fit in a `String`.
    CapacityOverflow,
    /// The allocator could not provide the buffer.
    AllocationFailed,
}

impl RenderFailure {
    /// The text reported in place of the message.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CapacityOverflow => "capacity overflow",
            Self::AllocationFailed => "memory allocation failed",
        }
    }
}

impl core::fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderFailure {}

pub(crate) struct Parts<'a> {
    pub category: &'a str,
    pub code: RawCode,
    pub context: &'a str,
    pub description: &'a str,
}

impl Parts<'_> {
    fn len(&self) -> Option<usize> {
        let separator = if self.description.is_empty() { 0 } else { 1 };
        self.category
            .len()
            .checked_add(PREFIX.len() + CODE_DIGITS + SUFFIX.len())?
            .checked_add(self.context.len())?
            .checked_add(separator)?
            .checked_add(self.description.len())
    }
}

/// Reserves `additional` bytes, reporting failure instead of aborting.
pub(crate) fn reserve(buf: &mut String, additional: usize) -> Result<(), RenderFailure> {
    buf.try_reserve_exact(additional).map_err(|_| {
        if additional > isize::MAX as usize {
            RenderFailure::CapacityOverflow
        } else {
            RenderFailure::AllocationFailed
        }
    })
}

/// Appends `code` as uppercase hex, most significant byte first.
pub(crate) fn push_code(buf: &mut String, code: RawCode) {
    for byte in code.to_be_bytes().iter() {
        buf.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        buf.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
    }
}

pub(crate) fn assemble<R>(parts: &Parts<'_>, reserve: R) -> Result<String, RenderFailure>
where
    R: FnOnce(&mut String, usize) -> Result<(), RenderFailure>,
{
    let len = parts.len().ok_or(RenderFailure::CapacityOverflow)?;
    let mut message = String::new();
    reserve(&mut message, len)?;

    message.push_str(parts.category);
    message.push_str(PREFIX);
    push_code(&mut message, parts.code);
    message.push_str(SUFFIX);
    message.push_str(parts.context);
    if !parts.description.is_empty() {
        message.push(' ');
        message.push_str(parts.description);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(code: RawCode) -> String {
        let mut s = String::new();
        push_code(&mut s, code);
        s
    }

    #[test]
    fn fixed_width_hex() {
        assert_eq!(hex(0), "00000000");
        assert_eq!(hex(2), "00000002");
        assert_eq!(hex(0xDEAD_BEEF), "DEADBEEF");
        assert_eq!(hex(0x8007_0005), "80070005");
        assert_eq!(hex(RawCode::MAX), "FFFFFFFF");
        assert_eq!(hex(0x0A0B), "00000A0B");
    }

    #[test]
    fn exact_capacity() {
        let parts = Parts {
            category: "POSIX",
            code: 2,
            context: "open config",
            description: "No such file or directory",
        };
        let message = assemble(&parts, reserve).unwrap();
        assert_eq!(message, "POSIX[0x00000002]open config No such file or directory");
        assert_eq!(Some(message.len()), parts.len());
    }

    #[test]
    fn oversized_reservation() {
        let mut buf = String::new();
        assert_eq!(
            reserve(&mut buf, usize::MAX),
            Err(RenderFailure::CapacityOverflow)
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn reservation_failure_propagates() {
        let parts = Parts {
            category: "WIN32",
            code: 5,
            context: "",
            description: "",
        };
        let result = assemble(&parts, |_, _| Err(RenderFailure::AllocationFailed));
        assert_eq!(result, Err(RenderFailure::AllocationFailed));
        assert_eq!(
            RenderFailure::AllocationFailed.to_string(),
            "memory allocation failed"
        );
    }
}
