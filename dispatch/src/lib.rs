//! Command validation and dispatch for the `searchersh` restricted shell.
//!
//! `searchersh` is installed as the forced login shell of a constrained SSH
//! account. The SSH layer hands it `("searchersh", "-c", "<command> [arg]")`
//! and expects it to either replace itself with one whitelisted privileged
//! tool or refuse with exit status 1. Everything in this crate is pure
//! decision logic: validation produces an [`ExecSpec`] describing the exec to
//! perform, and the binary crate is the only place that actually replaces the
//! process image. That split lets the whole whitelist be exercised in tests
//! without ever launching a privileged tool.

mod command;
mod dispatch;
mod error;
mod mount;

pub use crate::command::COMMAND_FLAG;
pub use crate::command::Command;
pub use crate::command::ExecSpec;
pub use crate::command::MAX_LINE_COUNT;
pub use crate::command::SHELL_NAME;
pub use crate::dispatch::dispatch;
pub use crate::dispatch::parse_line_count;
pub use crate::dispatch::split_command_line;
pub use crate::dispatch::validate_invocation;
pub use crate::error::DispatchError;
pub use crate::error::Result;
pub use crate::mount::InitProbe;
pub use crate::mount::MountPointProbe;
pub use crate::mount::PERSISTENT_MOUNT;
