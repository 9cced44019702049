//! The validation state machine: invocation shape, tokenization, the
//! initialization gate, and command resolution.

use tracing::debug;

use crate::command::CAT;
use crate::command::COMMAND_FLAG;
use crate::command::Command;
use crate::command::ExecSpec;
use crate::command::LIGHTHOUSE_SERVICE;
use crate::command::LOG_FILE;
use crate::command::MAX_LINE_COUNT;
use crate::command::NETWORK_STATE_FILE;
use crate::command::SHELL_NAME;
use crate::command::SUDO;
use crate::command::SYSTEMCTL;
use crate::command::TAIL;
use crate::command::TDX_INIT;
use crate::command::TOGGLE;
use crate::error::DispatchError;
use crate::error::Result;
use crate::mount::InitProbe;

/// Checks the forced-shell invocation shape and returns the command line.
///
/// The SSH layer always invokes the shell as `searchersh -c "<line>"`;
/// anything else means the binary was run outside its contract and is
/// refused before any further parsing.
pub fn validate_invocation(args: &[String]) -> Result<&str> {
    if args.len() != 3 {
        return Err(DispatchError::WrongArgumentCount);
    }
    if args[0] != SHELL_NAME {
        return Err(DispatchError::WrongProgramName);
    }
    if args[1] != COMMAND_FLAG {
        return Err(DispatchError::MissingCommandFlag);
    }
    Ok(&args[2])
}

/// Splits the command line on space boundaries. The first token is the
/// command, the second (if present) its argument. Tokens past the second
/// are ignored for compatibility with the deployed shell contract; callers
/// must not grow semantics onto them.
pub fn split_command_line(line: &str) -> Result<(&str, Option<&str>)> {
    let mut tokens = line.split(' ').filter(|token| !token.is_empty());
    let command = tokens.next().ok_or(DispatchError::EmptyCommand)?;
    Ok((command, tokens.next()))
}

/// Validates the `logs` line count: every character an ASCII digit (which
/// rejects signs, decimals, whitespace, and the empty string), then range
/// `1..=10_000_000`. Counts too large for the integer type are out of range,
/// not wrapped.
pub fn parse_line_count(arg: &str) -> Result<u32> {
    if arg.is_empty() || !arg.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DispatchError::InvalidLineCount {
            arg: arg.to_string(),
        });
    }
    let count: u32 = arg
        .parse()
        .map_err(|_| DispatchError::LineCountOutOfRange)?;
    if !(1..=MAX_LINE_COUNT).contains(&count) {
        return Err(DispatchError::LineCountOutOfRange);
    }
    Ok(count)
}

/// Runs the full state machine over a forced command line and returns the
/// exec to perform. Never launches anything itself.
///
/// Order matters and matches the deployed contract: `initialize` is resolved
/// before the gate (it is what makes the gate passable), and the gate is
/// checked before the command is matched, so an unknown command on an
/// uninitialized device reports the gate failure.
pub fn dispatch(line: &str, probe: &dyn InitProbe) -> Result<ExecSpec> {
    let (token, arg) = split_command_line(line)?;

    if Command::from_token(token) == Some(Command::Initialize) {
        debug!("dispatching initialize (gate exempt)");
        return Ok(initialize_spec());
    }

    if !probe.is_initialized() {
        return Err(DispatchError::NotInitialized);
    }

    let command = Command::from_token(token).ok_or_else(|| DispatchError::UnknownCommand {
        command: token.to_string(),
    })?;
    debug!("dispatching {token}");
    resolve(command, arg)
}

fn resolve(command: Command, arg: Option<&str>) -> Result<ExecSpec> {
    match command {
        Command::Initialize => Ok(initialize_spec()),
        Command::Toggle => Ok(ExecSpec::fixed(SUDO, &["sudo", TOGGLE])),
        Command::Status => Ok(ExecSpec::fixed(CAT, &["cat", NETWORK_STATE_FILE])),
        Command::TailTheLogs => Ok(ExecSpec::fixed(TAIL, &["tail", "-f", LOG_FILE])),
        Command::Logs => {
            let arg = arg.ok_or(DispatchError::MissingLineCount)?;
            let count = parse_line_count(arg)?;
            Ok(ExecSpec {
                program: TAIL,
                argv: vec![
                    "tail".to_string(),
                    "-n".to_string(),
                    count.to_string(),
                    LOG_FILE.to_string(),
                ],
            })
        }
        Command::RestartLighthouse => Ok(ExecSpec::fixed(
            SUDO,
            &["sudo", SYSTEMCTL, "restart", LIGHTHOUSE_SERVICE],
        )),
    }
}

fn initialize_spec() -> ExecSpec {
    ExecSpec::fixed(SUDO, &["sudo", TDX_INIT, "set-passphrase"])
}
