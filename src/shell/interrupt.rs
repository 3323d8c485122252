//! SIGINT handling.
//!
//! Ctrl-C sets a process-wide flag instead of killing devcheck outright.
//! The running child receives the same signal from the terminal, the
//! command loop notices the flag, and the run unwinds with
//! [`DevcheckError::Interrupted`](crate::error::DevcheckError::Interrupted)
//! so `main` can print a message and exit with code 1.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn on_sigint(_signal: libc::c_int) {
    // Only async-signal-safe work here.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler. Safe to call more than once.
pub fn install_handler() {
    #[cfg(unix)]
    {
        let handler: extern "C" fn(libc::c_int) = on_sigint;
        // SAFETY: the handler only stores to an atomic, which is
        // async-signal-safe, and it lives for the whole program.
        unsafe {
            libc::signal(libc::SIGINT, handler as libc::sighandler_t);
        }
    }
}

/// Whether SIGINT has been received.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Fail with `Interrupted` if SIGINT has been received.
pub fn check() -> crate::error::Result<()> {
    if is_interrupted() {
        Err(crate::error::DevcheckError::Interrupted)
    } else {
        Ok(())
    }
}
