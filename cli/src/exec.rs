//! Process replacement: the terminal step of a validated dispatch.

use std::ffi::CString;
use std::io;

use searchersh_dispatch::DispatchError;
use searchersh_dispatch::ExecSpec;

/// Replaces the current process image with the resolved target. On success
/// this never returns; the target inherits our pid and file descriptors. If
/// the exec itself fails (missing binary, permission denied), the error is
/// reported on stderr and the process exits 1 — the only way a fully
/// validated command can still fail.
pub fn replace_process(spec: &ExecSpec) -> ! {
    let err = exec(spec);
    eprintln!("searchersh: {err}");
    std::process::exit(1);
}

fn exec(spec: &ExecSpec) -> DispatchError {
    let program = match CString::new(spec.program) {
        Ok(program) => program,
        Err(_) => return nul_error(spec),
    };
    let mut c_argv = Vec::with_capacity(spec.argv.len());
    for arg in &spec.argv {
        match CString::new(arg.as_str()) {
            Ok(arg) => c_argv.push(arg),
            Err(_) => return nul_error(spec),
        }
    }

    let mut argv_ptrs: Vec<*const libc::c_char> = c_argv.iter().map(|arg| arg.as_ptr()).collect();
    argv_ptrs.push(std::ptr::null());

    unsafe {
        libc::execv(program.as_ptr(), argv_ptrs.as_ptr());
    }

    // execv only returns on failure.
    DispatchError::Exec {
        program: spec.program.to_string(),
        source: io::Error::last_os_error(),
    }
}

fn nul_error(spec: &ExecSpec) -> DispatchError {
    DispatchError::Exec {
        program: spec.program.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "argument contains NUL byte"),
    }
}
