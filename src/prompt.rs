//! Interactive prompt string.
//!
//! Rendered as `user@host dir #`, where `dir` is the final component of the
//! working directory. Shown only when stdin is attached to a terminal.

use std::env;

/// Render the prompt for the current user, host, and working directory.
pub fn render() -> String {
    let username = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string());

    let dir = env::current_dir()
        .ok()
        .map(|cwd| crate::fsops::display_name(&cwd))
        .unwrap_or_else(|| "?".to_string());

    format!("{username}@{} {dir} #", hostname())
}

#[cfg(unix)]
fn hostname() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: gethostname writes a NUL-terminated name into the buffer.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc == 0 {
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        String::from_utf8_lossy(&buf[..end]).into_owned()
    } else {
        "localhost".to_string()
    }
}

#[cfg(not(unix))]
fn hostname() -> String {
    std::env::var("COMPUTERNAME").unwrap_or_else(|_| "localhost".to_string())
}
