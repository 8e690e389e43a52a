//! Entered without the std runtime so the inherited `SIGPIPE` disposition
//! reaches the exec untouched.
#![no_main]

use {
    libc::{
        c_char,
        c_int,
    },
    loga::{
        fatal,
        Log,
    },
    sigterm_exec::{
        launch::{
            parse_invocation,
            Invocation,
        },
        signal::ignore_termination,
    },
    std::{
        ffi::{
            CStr,
            OsStr,
            OsString,
        },
        os::unix::ffi::OsStrExt,
        process::exit,
    },
};

#[no_mangle]
extern "C" fn main(argc: c_int, argv: *const *const c_char) -> c_int {
    let log = Log::new_root(loga::INFO);
    if let Err(e) = ignore_termination() {
        log.log_err(loga::WARN, e);
    }
    let mut args = vec![];
    if !argv.is_null() {
        for i in 0 .. argc.max(0) as usize {
            let arg = unsafe { *argv.add(i) };
            if arg.is_null() {
                break;
            }
            args.push(OsString::from(OsStr::from_bytes(unsafe { CStr::from_ptr(arg) }.to_bytes())));
        }
    }
    match parse_invocation(args) {
        Invocation::Usage(usage) => {
            eprintln!("{}", usage);
            exit(1);
        },
        Invocation::Launch(launch) => fatal(launch.exec(&log)),
    }
}
