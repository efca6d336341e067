//! The `osstatus` command: parse a line, fetch, format, report.

pub mod args;
pub mod host;

pub use args::{LookupArgs, ParsedArgs};
pub use host::CommandHost;

use crate::client::OsStatusClient;
use crate::error::command::CommandError;
use crate::error::lookup::LookupError;
use crate::formatter::{Styling, format_records};

use log::debug;

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Formatted lookup results (possibly none).
    Lines(Vec<String>),
    /// Help text; nothing was looked up.
    Help(String),
}

pub struct OsStatusCommand {
    client: OsStatusClient,
    styling: Styling,
}

impl OsStatusCommand {
    pub fn new(client: OsStatusClient, styling: Styling) -> Self {
        Self { client, styling }
    }

    pub fn styling(&self) -> Styling {
        self.styling
    }

    /// Run one command line, e.g. `-v -50` or `"errSecItemNotFound" -p iOS`.
    pub async fn run(&self, line: &str) -> Result<CommandOutcome, CommandError> {
        let tokens = args::tokenize(line)?;
        self.run_args(tokens).await
    }

    /// Run with arguments that are already split (a process argv).
    pub async fn run_args<I, T>(&self, tokens: I) -> Result<CommandOutcome, CommandError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Ok(CommandOutcome::Help(args::help_text()));
        }

        let lookup_args = match args::parse(&tokens)? {
            ParsedArgs::Help(help) => return Ok(CommandOutcome::Help(help)),
            ParsedArgs::Lookup(lookup_args) => lookup_args,
        };

        let query = lookup_args.query().map_err(LookupError::from)?;
        debug!("Running lookup for {query:?}");

        let records = self.client.fetch(&query).await?;
        Ok(CommandOutcome::Lines(format_records(
            &records,
            lookup_args.verbose,
            self.styling,
        )))
    }

    /// [`run`](Self::run) and report the result to `host`.
    pub async fn execute<H>(&self, line: &str, host: &mut H)
    where
        H: CommandHost + ?Sized,
    {
        host::report(self.run(line).await, host);
    }

    /// [`run_args`](Self::run_args) and report the result to `host`.
    pub async fn execute_args<I, T, H>(&self, tokens: I, host: &mut H)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        H: CommandHost + ?Sized,
    {
        host::report(self.run_args(tokens).await, host);
    }
}
