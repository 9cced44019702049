//! Initialization-state probing via mount-point detection.

use std::ffi::CString;
use std::io;

use tracing::debug;

/// Path that holds device state after first-time setup. The device counts as
/// initialized once a dedicated filesystem is mounted here.
pub const PERSISTENT_MOUNT: &str = "/persistent";

/// Reports whether first-time setup has completed. Kept behind a trait so
/// the dispatch state machine can be exercised with a fake instead of the
/// live mount table.
pub trait InitProbe {
    fn is_initialized(&self) -> bool;
}

/// Production probe: a path is a mount point when its device id differs from
/// its parent's. Any stat failure reads as uninitialized (fail closed).
#[derive(Debug, Clone, Copy)]
pub struct MountPointProbe {
    path: &'static str,
}

impl MountPointProbe {
    /// Probe the standard `/persistent` mount.
    pub fn new() -> Self {
        Self::at(PERSISTENT_MOUNT)
    }

    pub fn at(path: &'static str) -> Self {
        Self { path }
    }
}

impl Default for MountPointProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl InitProbe for MountPointProbe {
    fn is_initialized(&self) -> bool {
        let path = self.path;
        let parent = format!("{path}/..");
        match (device_id(path), device_id(&parent)) {
            (Ok(dev), Ok(parent_dev)) => dev != parent_dev,
            (Err(err), _) | (_, Err(err)) => {
                debug!("stat failed while probing {path}: {err}");
                false
            }
        }
    }
}

fn device_id(path: &str) -> io::Result<libc::dev_t> {
    let c_path = CString::new(path)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
    let mut st: libc::stat = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::stat(c_path.as_ptr(), &mut st) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(st.st_dev)
}
