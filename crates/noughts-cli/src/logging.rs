use std::{fs::File, io, path::PathBuf, sync::Arc};

use anyhow::{Context as _, anyhow};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "noughts=info";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr)]
pub enum LogFormat {
    #[default]
    #[display("text")]
    Text,
    #[display("json")]
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub struct LogArg {
    /// Write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
    /// Log line format (text or json)
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Where logs go when no log file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// The terminal is taken by the UI.
    Discard,
}

/// Installs the global subscriber.
pub fn init(arg: &LogArg, fallback: Fallback) -> anyhow::Result<()> {
    match (&arg.log_file, fallback) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            install(Arc::new(file), arg.log_format, false)
        }
        (None, Fallback::Stderr) => install(io::stderr, arg.log_format, true),
        (None, Fallback::Discard) => Ok(()),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install<W>(writer: W, format: LogFormat, ansi: bool) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(ansi);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|err| anyhow!("Failed to install the log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default().to_string(), "text");
    }

    #[test]
    fn test_discard_installs_nothing() {
        init(&LogArg::default(), Fallback::Discard).unwrap();
    }
}
