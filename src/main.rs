//! RAX FTP Client - Entry Point
//!
//! Runs a single transfer against the server named in the configuration:
//!
//! ```text
//! rax-ftp-client get <remote-path> <local-path>
//! rax-ftp-client put <local-path> <remote-path>
//! ```

use std::process::ExitCode;

use log::{error, info};

use rax_ftp_client::{ClientConfig, Result, Session};

enum Action {
    Get { remote: String, local: String },
    Put { local: String, remote: String },
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Action> {
    let verb = args.next()?;
    let first = args.next()?;
    let second = args.next()?;
    match verb.as_str() {
        "get" => Some(Action::Get {
            remote: first,
            local: second,
        }),
        "put" => Some(Action::Put {
            local: first,
            remote: second,
        }),
        _ => None,
    }
}

async fn run(config: &ClientConfig, action: Action) -> Result<()> {
    let mut session = Session::dial(&config.host).await?;
    session.set_await_completion(config.await_completion);

    let login = session.login(&config.username, &config.password).await?;
    info!("Login reply: {}", login);

    let outcome = match &action {
        Action::Get { remote, local } => {
            session
                .download_file(remote, local, config.mode, config.timeout())
                .await
        }
        Action::Put { local, remote } => {
            session
                .upload_file(local, remote, config.mode, config.timeout())
                .await
        }
    };

    // Logout even after a failed transfer; the transfer error wins.
    let logout = session.logout().await;
    let bytes = outcome?;
    logout?;

    info!("Transferred {} bytes", bytes);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let Some(action) = parse_args(std::env::args().skip(1)) else {
        eprintln!("usage: rax-ftp-client get <remote> <local> | put <local> <remote>");
        return ExitCode::from(2);
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, action).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Transfer failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
