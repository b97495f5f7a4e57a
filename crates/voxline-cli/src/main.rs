//! Binary entry point - the composition root.
//!
//! This is the only place where the real speech adapters are wired to the
//! core pipeline. Command dispatch routes to handlers; everything else
//! lives in the library crates.

use clap::Parser;

use voxline_cli::{Cli, handlers};
use voxline_core::catalog::LineCatalog;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_tones {
        handlers::list_tones::execute(&LineCatalog::builtin());
        return;
    }
    if cli.list_voices {
        handlers::list_voices::execute();
        return;
    }

    if let Err(err) = handlers::generate::execute(&cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Initialize the fmt subscriber.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies with a
/// `warn` default so the run report stays the only routine output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}
