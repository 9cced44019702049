//! The fixed command whitelist and its target-binary table.

/// The only program name the forced shell accepts as `argv[0]`.
pub const SHELL_NAME: &str = "searchersh";

/// The only mode flag the forced shell accepts as `argv[1]`.
pub const COMMAND_FLAG: &str = "-c";

/// Upper bound on the `logs` line count, to keep an attacker-controlled
/// count from turning `tail` into a resource sink.
pub const MAX_LINE_COUNT: u32 = 10_000_000;

pub(crate) const SUDO: &str = "/usr/bin/sudo";
pub(crate) const TDX_INIT: &str = "/usr/bin/tdx-init";
pub(crate) const TOGGLE: &str = "/usr/bin/toggle";
pub(crate) const CAT: &str = "/bin/cat";
pub(crate) const TAIL: &str = "/usr/bin/tail";
pub(crate) const SYSTEMCTL: &str = "/usr/bin/systemctl";

pub(crate) const NETWORK_STATE_FILE: &str = "/etc/searcher-network.state";
pub(crate) const LOG_FILE: &str = "/persistent/delayed_logs/output.log";
pub(crate) const LIGHTHOUSE_SERVICE: &str = "lighthouse";

/// One entry of the whitelist. Anything not listed here is refused; there is
/// no fallthrough to a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Initialize,
    Toggle,
    Status,
    TailTheLogs,
    Logs,
    RestartLighthouse,
}

impl Command {
    /// The command set as shown in usage diagnostics.
    pub const VALID_COMMANDS: &'static str =
        "toggle, status, logs, tail-the-logs, restart-lighthouse, initialize";

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "initialize" => Some(Self::Initialize),
            "toggle" => Some(Self::Toggle),
            "status" => Some(Self::Status),
            "tail-the-logs" => Some(Self::TailTheLogs),
            "logs" => Some(Self::Logs),
            "restart-lighthouse" => Some(Self::RestartLighthouse),
            _ => None,
        }
    }

    /// Every command except `initialize` is blocked until the device has
    /// completed first-time setup; `initialize` is what performs it.
    pub fn requires_initialized(self) -> bool {
        !matches!(self, Self::Initialize)
    }
}

/// The terminal action of a successful dispatch: the program to exec and its
/// full argument vector, `argv[0]` included. Validation only ever builds
/// this value; executing it (and never returning) is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecSpec {
    pub program: &'static str,
    pub argv: Vec<String>,
}

impl ExecSpec {
    pub(crate) fn fixed(program: &'static str, argv: &[&str]) -> Self {
        Self {
            program,
            argv: argv.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }
}
