use thiserror::Error;

use crate::command::Command;
use crate::command::MAX_LINE_COUNT;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Every way a forced command line can be refused. All variants are
/// terminal: the binary reports them on stderr and exits 1 without launching
/// anything.
#[derive(Debug, Error)]
pub enum DispatchError {
    // Invocation shape.
    #[error("invalid number of arguments")]
    WrongArgumentCount,
    #[error("this program must be invoked as '{}'", crate::command::SHELL_NAME)]
    WrongProgramName,
    #[error("second argument must be '{}'", crate::command::COMMAND_FLAG)]
    MissingCommandFlag,

    // Command line.
    #[error("no command provided; valid commands are: {}", Command::VALID_COMMANDS)]
    EmptyCommand,
    #[error("invalid command '{command}'; valid commands are: {}", Command::VALID_COMMANDS)]
    UnknownCommand { command: String },

    // Initialization gate.
    #[error("system not initialized; run 'initialize' first")]
    NotInitialized,

    // `logs` argument.
    #[error("usage: logs <number_of_lines>")]
    MissingLineCount,
    #[error("invalid line count (non-digit characters detected): {arg}")]
    InvalidLineCount { arg: String },
    #[error("number of lines must be between 1 and {MAX_LINE_COUNT}")]
    LineCountOutOfRange,

    // Process replacement.
    #[error("failed to execute {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
