use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `KIRA_LOG` (or `RUST_LOG`) overrides the
/// level chosen on the command line.
pub fn init_logging(verbose: bool, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "kira_speechrubric=debug"
    } else {
        "kira_speechrubric=info"
    };

    let filter = EnvFilter::try_from_env("KIRA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
