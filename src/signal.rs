//! The launcher drops `SIGTERM` while it is still itself, then hands the process
//! over to the target command.
//!
//! A handler is installed rather than `SIG_IGN`. Caught signals revert to the
//! default disposition on exec while ignored ones are inherited, so the target
//! starts with ordinary `SIGTERM` behavior.
use {
    loga::ResultContext,
    std::{
        io,
        mem::zeroed,
        ptr::null_mut,
    },
};

extern "C" fn discard_signal(_: libc::c_int) { }

/// Install a no-op handler for `SIGTERM`, process-wide. Other signals are left as
/// inherited.
pub fn ignore_termination() -> Result<(), loga::Error> {
    unsafe {
        let mut action: libc::sigaction = zeroed();
        action.sa_sigaction = discard_signal as *const () as libc::sighandler_t;
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut action.sa_mask);
        if libc::sigaction(libc::SIGTERM, &action, null_mut()) != 0 {
            return Err(io::Error::last_os_error()).context("Error installing SIGTERM handler");
        }
    }
    return Ok(());
}
