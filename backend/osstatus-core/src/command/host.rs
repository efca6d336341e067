use crate::command::CommandOutcome;
use crate::error::command::CommandError;

use log::{Level, debug, log};

/// Level lookup failures are logged at. Stays below `Warn`: the host
/// prints the error itself.
pub const LOOKUP_FAILURE_LOG_LEVEL: Level = Level::Info;

/// The console a command reports to.
///
/// Mirrors a debugger's command-return object: result messages, a single
/// error, and a side channel for usage text that is not part of the result.
pub trait CommandHost {
    /// Append one result line.
    fn append_message(&mut self, message: &str);

    /// Mark the command as failed with `message`.
    fn set_error(&mut self, message: &str);

    /// Show help or usage text outside the command result.
    fn print_usage(&mut self, usage: &str);
}

/// Deliver a command result to `host`.
///
/// Either every line is appended or exactly one error is set; never both.
/// The error is the bare message, without kind prefix or source location.
/// Help and syntax problems only reach [`CommandHost::print_usage`].
pub fn report<H>(result: Result<CommandOutcome, CommandError>, host: &mut H)
where
    H: CommandHost + ?Sized,
{
    match result {
        Ok(CommandOutcome::Lines(lines)) => {
            for line in &lines {
                host.append_message(line);
            }
        }
        Ok(CommandOutcome::Help(help)) => host.print_usage(&help),
        Err(CommandError::Syntax { message, location }) => {
            debug!("Rejected command line {location}");
            host.print_usage(&message);
        }
        Err(CommandError::Lookup(error)) => {
            log!(LOOKUP_FAILURE_LOG_LEVEL, "Lookup failed: {error}");
            host.set_error(error.message());
        }
    }
}
