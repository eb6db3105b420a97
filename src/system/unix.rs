use crate::RawCode;
use alloc::string::String;

fn errno() -> libc::c_int {
    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    use libc::___errno as errno_location;
    #[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
    use libc::__errno as errno_location;
    #[cfg(any(target_os = "linux", target_os = "redox", target_os = "dragonfly"))]
    use libc::__errno_location as errno_location;
    #[cfg(any(target_os = "freebsd", target_os = "ios", target_os = "macos"))]
    use libc::__error as errno_location;

    unsafe { *errno_location() as libc::c_int }
}

pub(crate) fn last_error() -> RawCode {
    errno() as RawCode
}

pub(crate) fn describe(code: RawCode) -> Option<String> {
    let mut buf = [0u8; 512];
    // Safety: buf is valid for writes of its length, and strerror_r always nul-terminates within
    // it. Unknown codes still produce text, so the return value is not checked.
    unsafe {
        libc::strerror_r(
            code as libc::c_int,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
        );
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    if len == 0 {
        None
    } else {
        Some(String::from_utf8_lossy(&buf[..len]).into_owned())
    }
}
