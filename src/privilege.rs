//! Host privilege check.
//!
//! Every step rewrites system configuration or drives system services,
//! so the whole run requires an effective uid of 0.

use crate::error::{Error, Result};

pub fn ensure_root() -> Result<()> {
    // SAFETY: geteuid has no preconditions and cannot fail.
    let euid = unsafe { libc::geteuid() };
    if euid != 0 {
        return Err(Error::Configuration(
            "this tool must run as root (try sudo)".to_string(),
        ));
    }
    Ok(())
}
