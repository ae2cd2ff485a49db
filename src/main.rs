// ============================================================================
// Roman Calculator CLI
// Reads expressions from stdin and prints results to stdout
// ============================================================================

use roman_calculator::prelude::*;
use std::io;
use std::sync::Arc;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr so stdout carries only calculator output
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let session = Session::new(CalculatorConfig::classic(), Arc::new(LoggingEventHandler))
        .map_err(|reason| io::Error::new(io::ErrorKind::InvalidInput, reason))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
