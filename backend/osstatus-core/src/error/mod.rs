pub mod command;
pub mod config;
pub mod lookup;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Lookup(#[from] lookup::LookupError),

    #[error(transparent)]
    Command(#[from] command::CommandError),
}
