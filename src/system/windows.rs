use crate::RawCode;
use alloc::string::String;
use winapi::{
    shared::minwindef::HLOCAL,
    um::{
        errhandlingapi::GetLastError,
        winbase::{
            FormatMessageW, LocalFree, FORMAT_MESSAGE_ALLOCATE_BUFFER, FORMAT_MESSAGE_FROM_SYSTEM,
            FORMAT_MESSAGE_IGNORE_INSERTS,
        },
        winnt::{LANG_ENGLISH, LPWSTR, MAKELANGID, SUBLANG_DEFAULT},
    },
};

/// A buffer allocated by `FormatMessageW`, freed on drop.
struct LocalBuffer(LPWSTR);

impl Drop for LocalBuffer {
    fn drop(&mut self) {
        // Safety: the buffer was allocated by the system with LocalAlloc
        unsafe {
            LocalFree(self.0 as HLOCAL);
        }
    }
}

pub(crate) fn last_error() -> RawCode {
    // Safety: cannot fail
    unsafe { GetLastError() }
}

pub(crate) fn describe(code: RawCode) -> Option<String> {
    let mut buffer: LPWSTR = core::ptr::null_mut();
    // Safety:
    // With FORMAT_MESSAGE_ALLOCATE_BUFFER, the buffer argument receives a pointer to a buffer
    // allocated by the system.
    let length = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_ALLOCATE_BUFFER
                | FORMAT_MESSAGE_FROM_SYSTEM
                | FORMAT_MESSAGE_IGNORE_INSERTS,
            core::ptr::null(),
            code,
            MAKELANGID(LANG_ENGLISH, SUBLANG_DEFAULT).into(),
            &mut buffer as *mut LPWSTR as LPWSTR,
            0,
            core::ptr::null_mut(),
        )
    };
    if length == 0 || buffer.is_null() {
        return None;
    }

    let buffer = LocalBuffer(buffer);
    // Safety: the system wrote `length` characters to the buffer
    let text = unsafe { core::slice::from_raw_parts(buffer.0, length as usize) };
    Some(String::from_utf16_lossy(text))
}
