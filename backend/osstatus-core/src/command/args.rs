use crate::COMMAND_NAME;
use crate::error::command::CommandError;

use common::ErrorLocation;
use models::{LookupQuery, LookupQueryBuilder, ModelError, Platform};

use std::panic::Location;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Arguments of one `osstatus` invocation.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = COMMAND_NAME, no_binary_name = true, disable_version_flag = true)]
#[command(about = "Look up what an iOS, macOS, tvOS or watchOS status code means")]
#[command(after_help = "Examples:\n  osstatus -50\n  osstatus -v errSecItemNotFound\n  osstatus --platform iOS 1009")]
pub struct LookupArgs {
    /// The code to lookup (numeric or symbolic)
    #[arg(allow_negative_numbers = true)]
    pub code: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Filter by platform. Possible values: [ iOS | macOS | tvOS | watchOS ]
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Option<Platform>,
}

impl LookupArgs {
    pub fn query(&self) -> Result<LookupQuery, ModelError> {
        let builder = LookupQueryBuilder::default().with_code(self.code.as_str());
        match self.platform {
            Some(platform) => builder.with_platform(platform).build(),
            None => builder.build(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    /// `-h`/`--help` was given; holds the rendered help.
    Help(String),
    Lookup(LookupArgs),
}

pub fn help_text() -> String {
    LookupArgs::command().render_help().to_string()
}

/// Parse already-tokenized arguments (without the command name).
///
/// # Errors
/// [`CommandError::Syntax`] with the parser's usage text for unknown flags,
/// a missing code, or an unknown platform.
#[track_caller]
pub fn parse(tokens: &[String]) -> Result<ParsedArgs, CommandError> {
    match LookupArgs::try_parse_from(tokens) {
        Ok(args) => Ok(ParsedArgs::Lookup(args)),
        Err(error) if error.kind() == ErrorKind::DisplayHelp => {
            Ok(ParsedArgs::Help(error.render().to_string()))
        }
        Err(error) => Err(CommandError::Syntax {
            message: error.render().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Split a command line with POSIX shell quoting rules.
#[track_caller]
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    shlex::split(line).ok_or_else(|| CommandError::Syntax {
        message: format!("Unbalanced quotes or trailing escape in: {line}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
