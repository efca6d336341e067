pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod formatter;


pub use client::OsStatusClient;
pub use command::{CommandHost, CommandOutcome, OsStatusCommand};
pub use config::LookupConfig;
pub use formatter::{Styling, format_records};

/// Name the command is registered under in a debugger console.
pub const COMMAND_NAME: &str = "osstatus";
pub const OSSTATUS_HOSTNAME: &str = "osstatus.com";
pub const OSSTATUS_SEARCH_PATH: &str = "/api/search/errors.json";
pub const DEFAULT_BASE_URL: &str =
    const_format::concatcp!("https://", OSSTATUS_HOSTNAME, OSSTATUS_SEARCH_PATH);
pub const DEFAULT_USER_AGENT: &str = "lldb_osstatus";
