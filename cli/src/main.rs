//! The `searchersh` binary: a forced login shell that narrows an SSH session
//! down to a fixed menu of privileged operations.

use searchersh_dispatch::DispatchError;
use searchersh_dispatch::MountPointProbe;
use searchersh_dispatch::dispatch;
use searchersh_dispatch::validate_invocation;
use tracing_subscriber::EnvFilter;

mod exec;

fn main() {
    init_tracing();

    // Invalid UTF-8 in argv cannot match any whitelisted token, so lossy
    // conversion only ever turns a bad invocation into a refused one.
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let line = match validate_invocation(&args) {
        Ok(line) => line,
        Err(err) => fail(&err),
    };
    let spec = match dispatch(line, &MountPointProbe::new()) {
        Ok(spec) => spec,
        Err(err) => fail(&err),
    };
    tracing::debug!("replacing process with {}", spec.program);
    exec::replace_process(&spec)
}

/// The shell runs non-interactively under sshd, so logging stays quiet
/// unless the operator opts in via `SEARCHERSH_LOG`. Stdout is reserved for
/// the replaced program; everything we emit goes to stderr.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SEARCHERSH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(err: &DispatchError) -> ! {
    eprintln!("searchersh: {err}");
    std::process::exit(1);
}
