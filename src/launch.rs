use {
    loga::{
        ea,
        DebugDisplay,
        ErrContext,
        Log,
    },
    rustix::process::getpid,
    std::{
        ffi::{
            CString,
            OsStr,
            OsString,
        },
        io,
        iter::once,
        os::unix::ffi::OsStrExt,
        ptr::null,
    },
};

/// What the launcher was asked to do, from its own argv.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// No command given; holds the usage line to print.
    Usage(String),
    Launch(Launch),
}

/// A command to replace the current process with. `args` excludes the command
/// itself.
#[derive(Debug, PartialEq, Eq)]
pub struct Launch {
    pub command: OsString,
    pub args: Vec<OsString>,
}

pub fn usage(program: &OsStr) -> String {
    return format!("Usage: {} <command> [args...]", program.to_string_lossy());
}

/// Element 0 is the launcher's own name. Nothing after the command is
/// interpreted, flags included.
pub fn parse_invocation(argv: impl IntoIterator<Item = OsString>) -> Invocation {
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));
    let Some(command) = argv.next() else {
        return Invocation::Usage(usage(&program));
    };
    return Invocation::Launch(Launch {
        command,
        args: argv.collect(),
    });
}

impl Launch {
    /// Replace the process image, searching `PATH` when the command has no `/`.
    /// The pid, non-cloexec descriptors, signal mask and ignored signals carry
    /// over to the new program.
    ///
    /// Only returns if the exec failed.
    pub fn exec(self, log: &Log) -> loga::Error {
        let mut argv0 = vec![];
        for arg in once(&self.command).chain(&self.args) {
            match CString::new(arg.as_bytes()) {
                Ok(arg) => argv0.push(arg),
                Err(e) => {
                    return e.context_with("Argument contains a NUL byte", ea!(arg = arg.dbg_str()));
                },
            }
        }
        let mut argv = vec![];
        for arg in &argv0 {
            argv.push(arg.as_ptr());
        }
        argv.push(null());
        log.log_with(
            loga::DEBUG,
            "Replacing process image",
            ea!(command = self.command.dbg_str(), args = self.args.dbg_str(), pid = getpid().as_raw_nonzero().get()),
        );
        let e = unsafe {
            libc::execvp(argv0[0].as_ptr(), argv.as_ptr());
            io::Error::last_os_error()
        };
        return e.context_with(
            "Failed to execute command",
            ea!(command = self.command.dbg_str(), args = self.args.dbg_str()),
        );
    }
}
