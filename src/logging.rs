use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

/// Maps the number of `-v` flags to a level filter
///
/// Copy lines are logged at Info, so that is what a plain run shows.
pub fn verbosity_level(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger
///
/// Every record is printed to stdout, coloured by level when stdout is a
/// terminal. With `log_file` set, records are also appended to that file.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let colors = atty::is(atty::Stream::Stdout).then(level_colors);

    let mut dispatch = Dispatch::new().level(level).chain(console_dispatch(colors));
    if let Some(path) = log_file {
        dispatch = dispatch.chain(file_dispatch(path)?);
    }
    dispatch.apply()?;

    log::debug!("Logging at {level}");
    Ok(())
}

/// Picks the coloured or the plain rendering of a message for stdout
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack)
}

fn console_dispatch(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!("{}", console_line(colors.as_ref(), record.level(), message)))
        })
        .chain(std::io::stdout())
}

fn file_dispatch(path: &Path) -> Result<Dispatch> {
    let file = fern::log_file(path)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            let now = Local::now().fixed_offset();
            out.finish(format_args!(
                "{}",
                file_line(&now, record.level(), record.target(), message)
            ))
        })
        .chain(file))
}

fn console_line(colors: Option<&ColoredLevelConfig>, level: Level, message: impl Display) -> String {
    match colors {
        Some(colors) => format!(
            "\x1B[{}m{message}\x1B[0m",
            colors.get_color(&level).to_fg_str()
        ),
        None => message.to_string(),
    }
}

fn file_line(
    timestamp: &DateTime<FixedOffset>,
    level: Level,
    target: &str,
    message: impl Display,
) -> String {
    format!(
        "[{} {level} {target}] {message}",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
