use anyhow::Result;
use clap::Parser;
use hishtory_install::error::InstallError;
use hishtory_install::platform::{DefaultPlatformDetector, PlatformDetector};
use hishtory_install::{SUCCESS_MESSAGE, config::Overrides, runtime::RealRuntime};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// hishtory-install - download the hishtory client for this machine and run its installer
///
/// The download catalog is fetched from the hishtory API (https://api.hishtory.dev
/// by default, or HISHTORY_SERVER if set), the binary for this OS/architecture is
/// written to the staging path, and `<staging path> install` takes over from there.
#[derive(Parser, Debug)]
#[command(author, version = env!("HISHTORY_INSTALL_VERSION"), about)]
struct Cli {
    /// hishtory API server (also via HISHTORY_SERVER)
    #[arg(long = "server", value_name = "URL")]
    server: Option<String>,

    /// Where to write the downloaded client
    #[arg(
        long = "staging-path",
        env = "HISHTORY_STAGING_PATH",
        value_name = "PATH"
    )]
    staging_path: Option<PathBuf>,

    /// Timeout in seconds for each network request
    #[arg(
        long = "timeout",
        env = "HISHTORY_INSTALL_TIMEOUT",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: Option<u64>,

    /// Print the download URL for this machine and exit
    #[arg(long = "print-url")]
    print_url: bool,

    /// Report success even if the downloaded installer fails
    #[arg(long = "ignore-install-status")]
    ignore_install_status: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            server_url: self.server.clone(),
            staging_path: self.staging_path.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let runtime = RealRuntime;
    let host = DefaultPlatformDetector.detect();

    if cli.print_url {
        let url = hishtory_install::print_url(runtime, host, cli.overrides()).await?;
        println!("{}", url);
        return Ok(ExitCode::SUCCESS);
    }

    let status = hishtory_install::install(runtime, host, cli.overrides()).await?;
    if status.success() || cli.ignore_install_status {
        println!("{}", SUCCESS_MESSAGE);
        return Ok(ExitCode::SUCCESS);
    }

    match status.code {
        Some(code) => {
            eprintln!("hishtory install failed (exit code {})", code);
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
        None => {
            eprintln!("hishtory install was terminated by a signal");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// The unsupported-platform diagnostic goes to stdout; everything else is an
/// error on stderr.
fn error_report(e: &anyhow::Error) -> (Stream, String) {
    match e.downcast_ref::<InstallError>() {
        Some(err @ InstallError::UnsupportedPlatform { .. }) => (Stream::Stdout, err.to_string()),
        _ => (Stream::Stderr, format!("Error: {:#}", e)),
    }
}

fn report_error(e: &anyhow::Error) {
    match error_report(e) {
        (Stream::Stdout, msg) => println!("{}", msg),
        (Stream::Stderr, msg) => eprintln!("{}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["hishtory-install"]).unwrap();
        assert_eq!(cli.server, None);
        assert!(!cli.print_url);
        assert!(!cli.ignore_install_status);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "hishtory-install",
            "--server",
            "http://localhost:8080",
            "--staging-path",
            "/var/tmp/hc",
            "--timeout",
            "10",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.server_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(overrides.staging_path, Some(PathBuf::from("/var/tmp/hc")));
        assert_eq!(overrides.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["hishtory-install", "--print-url", "--ignore-install-status"])
                .unwrap();
        assert!(cli.print_url);
        assert!(cli.ignore_install_status);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["hishtory-install", "install"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_timeout() {
        assert!(Cli::try_parse_from(["hishtory-install", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn test_unsupported_platform_is_reported_on_stdout() {
        let err = anyhow::Error::from(InstallError::UnsupportedPlatform {
            os: "Windows".to_string(),
            arch: "x86_64".to_string(),
        });
        let (stream, msg) = error_report(&err);
        assert_eq!(stream, Stream::Stdout);
        assert!(msg.starts_with("No hishtory binary for system=Windows, machine=x86_64!"));
    }

    #[test]
    fn test_other_errors_are_reported_on_stderr() {
        let err = anyhow::Error::from(InstallError::Network {
            url: "https://api.hishtory.dev/api/v1/download".to_string(),
            message: "status_code=502".to_string(),
        });
        let (stream, msg) = error_report(&err);
        assert_eq!(stream, Stream::Stderr);
        assert!(msg.starts_with("Error: Network error"));
        assert!(msg.contains("status_code=502"));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        assert!(Cli::try_parse_from(["hishtory-install", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["hishtory-install", "--timeout", "1"]).is_ok());
    }
}
