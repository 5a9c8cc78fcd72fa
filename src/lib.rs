pub mod error;
pub mod generate;
pub mod letters;
pub mod parser;

pub use error::InvalidInputError;
pub use letters::{common_letters, present_letters, try_common_letters, Semantics};

/// Installs a stderr `fmt` subscriber, filtered by `RUST_LOG` or else `default_filter`.
///
/// Stdout is left for results.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
