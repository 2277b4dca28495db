use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, crate_authors, crate_description, crate_version,
    value_parser,
};
use log::LevelFilter;

use crate::constants::{
    BIN_NAME, DRY_RUN_HELP, HELP_FLAG, HELP_HELP, KEEP_GOING_HELP, LOG_FILE_HELP,
    STEAMAPPS_DIR_HELP, VERBOSE_HELP, VERSION_HELP,
};
use crate::errors::{Result, invalid_arguments_error};
use crate::logging::verbosity_level;

/// What the command line asked the program to do
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Print the usage text and exit successfully
    Help,
    /// Print the version and exit successfully
    Version,
    /// Copy the workshop maps
    Run(RunOptions),
}

/// Options for a copy run, taken from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Explicit SteamApps directory; `None` means use the OS default
    pub steamapps_dir: Option<PathBuf>,
    /// Only report the copies that would be made
    pub dry_run: bool,
    /// Keep copying when a single map fails
    pub keep_going: bool,
    /// Most detailed level that gets logged
    pub verbosity: LevelFilter,
    /// Extra file the log records are appended to
    pub log_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            steamapps_dir: None,
            dry_run: false,
            keep_going: false,
            verbosity: LevelFilter::Info,
            log_file: None,
        }
    }
}

/// Builds the command-line definition
///
/// Defines the following arguments:
/// - `steamapps_dir`: optional SteamApps directory (collected as a list so
///   surplus values can be reported instead of rejected by clap). Any OS
///   string is accepted, including names starting with `-` that are not
///   made of known short flags
/// - `dry`: run without copying any files
/// - `keep_going`: continue past failed copies
/// - `verbose`: increase verbosity level
/// - `log_file`: path of an additional log file
/// - `version`: print the version
///
/// Help is not handled by clap: a `--help` token anywhere wins over every
/// other argument, see [`validate_args`].
pub fn build_command() -> Command {
    let arg_steamapps_dir = Arg::new("steamapps_dir")
        .help(STEAMAPPS_DIR_HELP)
        .value_parser(value_parser!(PathBuf))
        .allow_hyphen_values(true)
        .action(ArgAction::Append);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_keep_going = Arg::new("keep_going")
        .short('k')
        .long("keep-going")
        .help(KEEP_GOING_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("file")
        .value_parser(value_parser!(PathBuf))
        .help(LOG_FILE_HELP);

    let arg_version = Arg::new("version")
        .short('V')
        .long("version")
        .help(VERSION_HELP)
        .action(ArgAction::SetTrue);

    Command::new(BIN_NAME)
        .author(crate_authors!())
        .about(crate_description!())
        .version(crate_version!())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(arg_steamapps_dir)
        .arg(arg_dry)
        .arg(arg_keep_going)
        .arg(arg_verbose)
        .arg(arg_log_file)
        .arg(arg_version)
}

/// Validates the command-line arguments (program name excluded)
///
/// # Errors
/// Returns an invalid arguments error when more than one directory is given,
/// when the given directory does not exist, or when clap rejects an option.
///
/// # Examples
/// ```
/// use std::ffi::OsString;
/// use workshop_maps::cli::{CliAction, validate_args};
///
/// let args: Vec<OsString> = ["one", "two", "--help"].map(OsString::from).into();
/// assert_eq!(validate_args(&args).unwrap(), CliAction::Help);
/// ```
pub fn validate_args(args: &[OsString]) -> Result<CliAction> {
    if args.iter().any(|arg| arg == OsStr::new(HELP_FLAG)) {
        return Ok(CliAction::Help);
    }

    let matches = build_command()
        .try_get_matches_from(std::iter::once(OsString::from(BIN_NAME)).chain(args.iter().cloned()))
        .map_err(|e| invalid_arguments_error(&first_error_line(&e.to_string())))?;

    if matches.get_flag("version") {
        return Ok(CliAction::Version);
    }

    let directories: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("steamapps_dir")
        .map(|values| values.collect())
        .unwrap_or_default();

    let steamapps_dir = match directories.as_slice() {
        [] => None,
        [directory] => {
            if !directory.exists() {
                return Err(invalid_arguments_error(
                    "Specified SteamApps directory does not exist.",
                ));
            }
            Some(directory.to_path_buf())
        }
        _ => return Err(invalid_arguments_error("Too many arguments.")),
    };

    Ok(CliAction::Run(RunOptions {
        steamapps_dir,
        dry_run: matches.get_flag("dry"),
        keep_going: matches.get_flag("keep_going"),
        verbosity: get_verbosity(&matches),
        log_file: get_log_file(&matches),
    }))
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LevelFilter {
    verbosity_level(matches.get_count("verbose"))
}

/// Gets the log file path, if one was given
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("log_file").cloned()
}

/// Returns the usage text shown for `--help` and after argument errors
pub fn usage() -> String {
    let mut lines = vec![
        format!("USAGE: {BIN_NAME} [--help] [steamapps_dir]"),
        format!("  - {HELP_HELP}"),
        format!("  - {STEAMAPPS_DIR_HELP}"),
    ];
    for (flags, help) in [
        ("-n, --dry", DRY_RUN_HELP),
        ("-k, --keep-going", KEEP_GOING_HELP),
        ("-v, --verbose", VERBOSE_HELP),
        ("-l, --log-file <file>", LOG_FILE_HELP),
        ("-V, --version", VERSION_HELP),
    ] {
        lines.push(format!("  - \"{flags}\": {help}"));
    }
    lines.join("\n")
}

/// Prints the usage text to stdout
pub fn show_help() {
    println!("{}", usage());
}

/// Returns the version line printed for `--version`
pub fn version() -> String {
    format!("{BIN_NAME} {}", crate_version!())
}

fn first_error_line(rendered: &str) -> String {
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
