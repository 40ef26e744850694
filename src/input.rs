//! Line-based input source.
//!
//! All stdin reads go through [`read_line`], both for command lines and for
//! interactive confirmations, so a confirmation answer never swallows bytes
//! that belong to the next command. On unix the read is done one byte at a
//! time through the raw descriptor: the standard library's buffered reader
//! retries interrupted reads internally, which would hide a SIGINT until the
//! next complete line arrives.

use std::io;

/// One read from the input source.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadLine {
    /// A line of input, including its trailing terminator if one was read.
    Line(String),
    /// End of input.
    Eof,
    /// The read was cut short by an interrupt signal.
    Interrupted,
}

/// Install the SIGINT handler that [`read_line`] and [`interrupt_pending`]
/// observe. A no-op on platforms without signals.
pub fn install_interrupt_handler() {
    imp::install_interrupt_handler();
}

/// Whether a SIGINT has arrived since the handler was installed.
pub fn interrupt_pending() -> bool {
    imp::interrupt_pending()
}

/// Read one line from standard input.
pub fn read_line() -> io::Result<ReadLine> {
    imp::read_line()
}

#[cfg(unix)]
mod imp {
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::ReadLine;

    static INTERRUPTED: AtomicBool = AtomicBool::new(false);

    extern "C" fn handle_sigint(_signal: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub(super) fn install_interrupt_handler() {
        // SAFETY: the handler only stores to an atomic, which is
        // async-signal-safe. SA_RESTART is deliberately not set so a
        // blocking read returns EINTR instead of resuming.
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = handle_sigint as libc::sighandler_t;
            action.sa_flags = 0;
            libc::sigemptyset(&mut action.sa_mask);
            libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut());
        }
    }

    pub(super) fn interrupt_pending() -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }

    pub(super) fn read_line() -> io::Result<ReadLine> {
        let mut bytes = Vec::new();
        loop {
            let mut byte = 0u8;
            // SAFETY: reads at most one byte into a valid stack buffer.
            let n = unsafe {
                libc::read(
                    libc::STDIN_FILENO,
                    std::ptr::addr_of_mut!(byte).cast::<libc::c_void>(),
                    1,
                )
            };
            match n {
                0 => {
                    if bytes.is_empty() {
                        return Ok(ReadLine::Eof);
                    }
                    return Ok(ReadLine::Line(
                        String::from_utf8_lossy(&bytes).into_owned(),
                    ));
                }
                1 => {
                    bytes.push(byte);
                    if byte == b'\n' {
                        return Ok(ReadLine::Line(
                            String::from_utf8_lossy(&bytes).into_owned(),
                        ));
                    }
                }
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() == io::ErrorKind::Interrupted {
                        return Ok(ReadLine::Interrupted);
                    }
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::io;

    use super::ReadLine;

    pub(super) fn install_interrupt_handler() {}

    pub(super) fn interrupt_pending() -> bool {
        false
    }

    pub(super) fn read_line() -> io::Result<ReadLine> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(ReadLine::Eof),
            _ => Ok(ReadLine::Line(line)),
        }
    }
}
