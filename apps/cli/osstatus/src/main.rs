use osstatus::error::OsStatusError;
use osstatus::host::TerminalHost;
use osstatus::{logger, setup};

use osstatus_core::Styling;

use std::env;
use std::process::ExitCode;

use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before anything reads OSSTATUS_* variables.
    let dotenv_path = setup::load_dotenv();

    // Logging is best effort; the lookup still runs without it.
    if let Err(e) = setup::log_dir().and_then(|dir| logger::initialize(&dir)) {
        eprintln!("osstatus: logging disabled: {e}");
    }
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }

    let command = match setup::load_config()
        .and_then(|config| setup::build_command(&config, Styling::detect()))
        .map_err(OsStatusError::from)
    {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("osstatus starting with styling {:?}", command.styling());

    let mut host = TerminalHost::stdio();
    command.execute_args(env::args().skip(1), &mut host).await;

    if host.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
