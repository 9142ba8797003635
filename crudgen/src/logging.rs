//! Log output for the CLI.

use eyre::{Result, WrapErr};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the crudgen crates
/// one level above `warn`.
pub fn init(verbose: u8) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive(verbose)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .wrap_err("Failed to install log subscriber")
}

fn directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,crudgen=info,crudgen_codegen=info,crudgen_codegen_rust=info,crudgen_manifest=info",
        2 => "warn,crudgen=debug,crudgen_codegen=debug,crudgen_codegen_rust=debug,crudgen_manifest=debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_parse() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(directive(verbose)).is_ok());
        }
    }
}
