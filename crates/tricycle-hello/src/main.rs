mod hello;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{bail, Result};

use tricycle_engine::device::{Context, ContextError, ContextInit};
use tricycle_engine::logging::{init_logging, LoggingConfig};
use tricycle_engine::mainloop::{MainLoop, WindowConfig};

use hello::Hello;

const EXIT_OK: u8 = 0;
const EXIT_CONTEXT_FAILED: u8 = 1;
const EXIT_LOOP_FAILED: u8 = 2;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let status = run(
        || Context::new(ContextInit::default()),
        launch,
        &mut std::io::stderr(),
    );

    ExitCode::from(status)
}

/// Creates the context, then hands it to `launch`.
///
/// Context failure is reported on `stderr` and nothing else runs.
fn run<C, L, W>(create_context: C, launch: L, stderr: &mut W) -> u8
where
    C: FnOnce() -> Result<Context, ContextError>,
    L: FnOnce(Context) -> Result<()>,
    W: Write,
{
    let context = match create_context() {
        Ok(context) => context,
        Err(err) => {
            // stderr may be closed; the exit status still reports the failure.
            let _ = writeln!(stderr, "Failed to create context: {}", err.message());
            return EXIT_CONTEXT_FAILED;
        }
    };

    match launch(context) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            log::error!("{err:#}");
            EXIT_LOOP_FAILED
        }
    }
}

/// Opens the window and runs the main loop until it ends.
fn launch(context: Context) -> Result<()> {
    let main_loop = MainLoop::new()?;
    let hello = main_loop.run(Hello::new(context, WindowConfig::default()))?;

    if hello.has_fatal_error() {
        bail!("rendering stopped after {} frames: surface lost", hello.frames());
    }

    log::info!("main loop exited after {} frames", hello.frames());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_failure_prints_message_and_exits_1() {
        let mut stderr = Vec::new();
        let mut launched = false;

        let status = run(
            || Err(ContextError::CreationFailed("no suitable GPU adapter".into())),
            |_ctx| {
                launched = true;
                Ok(())
            },
            &mut stderr,
        );

        assert_eq!(status, 1);
        assert!(!launched, "nothing may be drawn after context failure");
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Failed to create context: no suitable GPU adapter\n"
        );
    }
}
