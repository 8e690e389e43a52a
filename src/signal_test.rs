#![cfg(test)]

use {
    crate::signal::ignore_termination,
    rustix::process::{
        getpid,
        kill_process,
        Signal,
    },
    std::{
        mem::zeroed,
        ptr::null,
        thread::sleep,
        time::Duration,
    },
};

fn current_sigterm_action() -> libc::sigaction {
    unsafe {
        let mut action: libc::sigaction = zeroed();
        assert_eq!(libc::sigaction(libc::SIGTERM, null(), &mut action), 0);
        return action;
    }
}

#[test]
fn handler_is_caught_not_ignored() {
    ignore_termination().unwrap();
    let action = current_sigterm_action();
    assert_ne!(action.sa_sigaction, libc::SIG_IGN);
    assert_ne!(action.sa_sigaction, libc::SIG_DFL);
    assert_ne!(action.sa_flags & libc::SA_RESTART, 0);
}

#[test]
fn install_twice() {
    ignore_termination().unwrap();
    let first = current_sigterm_action().sa_sigaction;
    ignore_termination().unwrap();
    assert_eq!(current_sigterm_action().sa_sigaction, first);
}

#[test]
fn sigterm_is_discarded() {
    ignore_termination().unwrap();
    kill_process(getpid(), Signal::Term).unwrap();

    // Default disposition would have killed the test binary by now
    sleep(Duration::from_millis(100));
    assert_ne!(current_sigterm_action().sa_sigaction, libc::SIG_DFL);
}
