// ============================================================================
// Interactive Session
// Line-oriented read/evaluate/print loop over any reader and writer
// ============================================================================

use super::errors::CalcError;
use super::evaluator::Evaluator;
use crate::domain::{CalculatorConfig, ErrorPolicy};
use crate::interfaces::{EndReason, EventHandler, SessionEvent};
use chrono::Utc;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The exit command was entered
    Exited,
    /// No more input lines
    EndOfInput,
    /// An expression failed and the policy is `Halt`
    Halted(CalcError),
}

impl SessionOutcome {
    fn end_reason(&self) -> EndReason {
        match self {
            SessionOutcome::Exited => EndReason::ExitCommand,
            SessionOutcome::EndOfInput => EndReason::EndOfInput,
            SessionOutcome::Halted(_) => EndReason::Halted,
        }
    }
}

/// Reads expressions line by line and writes results or errors.
///
/// # Example
/// ```
/// use roman_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new().with_banner(false);
/// let session = Session::new(config, Arc::new(NoOpEventHandler)).unwrap();
///
/// let mut output = Vec::new();
/// let outcome = session.run("X + V\nexit\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(outcome, SessionOutcome::Exited);
/// assert!(String::from_utf8(output).unwrap().contains("XV\n"));
/// ```
pub struct Session {
    evaluator: Evaluator,
    event_handler: Arc<dyn EventHandler>,
}

impl Session {
    /// Create a session, validating the configuration first.
    pub fn new(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            evaluator: Evaluator::new(config),
            event_handler,
        })
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Run until the exit command, end of input, or (under `Halt`) the
    /// first failed expression. Only I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> io::Result<SessionOutcome> {
        let config = self.evaluator.config();
        tracing::info!(policy = ?config.error_policy, "calculator session started");

        if config.show_banner {
            self.write_banner(output)?;
        }

        let mut evaluated = 0usize;
        let mut rejected = 0usize;
        let mut lines = input.lines();

        let outcome = loop {
            writeln!(output)?;
            writeln!(
                output,
                "Enter expression (type '{}' to stop the program):",
                config.exit_command
            )?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break SessionOutcome::EndOfInput,
            };
            let line = line.trim();

            if line == config.exit_command {
                break SessionOutcome::Exited;
            }

            match self.evaluator.evaluate(line) {
                Ok(evaluation) => {
                    writeln!(output, "{}", evaluation)?;
                    evaluated += 1;
                    self.event_handler.on_event(SessionEvent::ExpressionEvaluated {
                        expression: line.to_string(),
                        result: evaluation.display,
                        timestamp: Utc::now(),
                    });
                },
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    rejected += 1;
                    self.event_handler.on_event(SessionEvent::ExpressionRejected {
                        expression: line.to_string(),
                        reason: err.to_string(),
                        timestamp: Utc::now(),
                    });
                    if config.error_policy == ErrorPolicy::Halt {
                        break SessionOutcome::Halted(err);
                    }
                },
            }
        };

        output.flush()?;
        tracing::info!(?outcome, evaluated, rejected, "calculator session ended");
        self.event_handler.on_event(SessionEvent::SessionEnded {
            reason: outcome.end_reason(),
            evaluated,
            rejected,
            timestamp: Utc::now(),
        });

        Ok(outcome)
    }

    fn write_banner<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let config = self.evaluator.config();
        writeln!(output)?;
        writeln!(output, "Calculator")?;
        writeln!(output)?;
        writeln!(
            output,
            "Expression consist of left value, operator and right value. \
             Roman and arabic number notation supported."
        )?;
        writeln!(
            output,
            "Both numbers should be integers in range [{}, {}], \
             elements should be separated by space symbol.",
            config.operand_min, config.operand_max
        )?;
        writeln!(
            output,
            "Supported operators: '+', '-', '*', '/'. Example: 10 * 9"
        )
    }
}
