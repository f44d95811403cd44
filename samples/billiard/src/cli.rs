use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Polar and azimuthal division counts of a sphere.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Divisions {
    pub polar: u32,
    pub azimuthal: u32,
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tessel=info,billiard=info",
        env = "BILLIARD_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Tessellation of the cue ball
    #[arg(short = 'd', long, default_value = "16,16", value_parser = parse_divisions, value_name = "POLAR,AZIMUTHAL")]
    pub ball_divisions: Divisions,
    /// Radius of the cue ball
    #[arg(short = 'r', long, default_value_t = 0.1)]
    pub ball_radius: f64,
    /// Number of evenly spaced frames to sample across the strike
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,
}

type ParseError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn parse_divisions(s: &str) -> Result<Divisions, ParseError> {
    let mut split = s.trim().split(',');
    let mut next = || -> Result<u32, ParseError> {
        let part = split.next().ok_or("expected two comma-separated counts")?;
        Ok(u32::from_str(part.trim())?)
    };
    let polar = next()?;
    let azimuthal = next()?;
    if split.next().is_some() {
        return Err("expected two comma-separated counts".into());
    }
    Ok(Divisions { polar, azimuthal })
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{parse_divisions, Cli, Divisions, LogFormat};

    #[test]
    fn divisions() {
        assert_eq!(
            parse_divisions(" 8, 12 ").unwrap(),
            Divisions {
                polar: 8,
                azimuthal: 12
            }
        );
        assert!(parse_divisions("8").is_err());
        assert!(parse_divisions("8,12,3").is_err());
        assert!(parse_divisions("8,x").is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["billiard"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert_eq!(
            cli.ball_divisions,
            Divisions {
                polar: 16,
                azimuthal: 16
            }
        );
        assert_eq!(cli.ball_radius, 0.1);
        assert_eq!(cli.steps, 8);
        assert!(Cli::try_parse_from(["billiard", "--steps", "0"]).is_err());
    }
}
