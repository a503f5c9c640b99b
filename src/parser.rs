// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::io::Write;
use std::process;

use log::{debug, warn};

use crate::args::{Args, Kind};
use crate::error::{Error, Result};
use crate::help::generate_help;
use crate::settings::Options;

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Arguments that always display help.
const HELP_OPTIONS: &[&str] = &["-h", "--help", "/?"];

/// Get all command-line arguments specified to the program, including
/// the program name (the first argument).
pub fn env_args() -> Vec<String> {
    env::args().collect()
}

fn looks_like_option(token: &str) -> bool {
    token.starts_with(OPT_PREFIX)
}

/// `-x` or `--anything`.
fn is_named_option(token: &str) -> bool {
    token.starts_with(LONG_OPT_PREFIX)
        || (token.starts_with(OPT_PREFIX) && token.chars().count() == 2)
}

/// `-xyz`.
fn is_short_cluster(token: &str) -> bool {
    token.starts_with(OPT_PREFIX) && token.chars().count() > 2
}

fn handler_failed(token: &str, cause: Error) -> Error {
    Error::HandlerFailed {
        token: token.into(),
        cause: Box::new(cause),
    }
}

/// Find the option a `-x` or `--name` token refers to.
///
/// Long names are compared case-insensitively and take priority over
/// (case-sensitive) short names.
fn find_named(args: &Args, token: &str) -> Option<usize> {
    if let Some(name) = token.strip_prefix(LONG_OPT_PREFIX) {
        if name.is_empty() {
            return None;
        }

        return args.find_long(name);
    }

    let short = token.chars().nth(1)?;

    args.find_short(short)
        .filter(|&i| args.entry(i).kind() != Kind::Positional)
}

/// Handle a `-x` or `--name` token found at `tokens[i]`.
///
/// Returns the index of the last token consumed.
fn handle_named<S>(tokens: &[S], mut i: usize, args: &mut Args) -> Result<usize>
where
    S: AsRef<str>,
{
    let token = tokens[i].as_ref();

    let index = find_named(args, token).ok_or_else(|| Error::UnknownOpt(token.into()))?;

    let arg = args.entry_mut(index);

    if arg.parsed() {
        return Err(Error::AlreadyParsed(token.into()));
    }

    arg.set_parsed();

    let next = tokens.get(i + 1).map(|t| t.as_ref());

    debug!("option {:?} matched {:?} ({:?})", token, arg.long_name(), arg.kind());

    match arg.kind() {
        Kind::Flag => arg.call_flag().map_err(|e| handler_failed(token, e))?,

        Kind::Required => {
            let value = match next {
                None => return Err(Error::MissingOptArg(token.into())),
                Some(v) if looks_like_option(v) => {
                    return Err(Error::OptArgIsOption(token.into(), v.into()))
                }
                Some(v) => v,
            };

            i += 1;

            arg.call_value(value).map_err(|e| handler_failed(token, e))?;
        }

        Kind::Optional | Kind::Defaulted => {
            let fallback = match arg.kind() {
                Kind::Defaulted => arg.default_value().to_string(),
                _ => String::new(),
            };

            let value = match next {
                Some(v) if !looks_like_option(v) => {
                    i += 1;
                    v
                }
                _ => fallback.as_str(),
            };

            arg.call_value(value).map_err(|e| handler_failed(token, e))?;
        }

        Kind::Multi => {
            let mut values = Vec::<&str>::new();

            while let Some(v) = tokens.get(i + 1).map(|t| t.as_ref()) {
                if looks_like_option(v) {
                    break;
                }

                values.push(v);
                i += 1;

                if values.len() > arg.max_values() {
                    return Err(Error::TooManyValues {
                        name: arg.long_name().into(),
                        max: arg.max_values(),
                    });
                }
            }

            arg.call_multi(&values).map_err(|e| handler_failed(token, e))?;
        }

        // find_named() never returns positional arguments.
        Kind::Positional => return Err(Error::UnknownOpt(token.into())),
    }

    Ok(i)
}

/// Handle a concatenated short option token such as `-abc`.
///
/// Every option in the cluster is checked before any callback is called.
/// Callbacks are called in the order the options were registered.
fn handle_cluster(token: &str, args: &mut Args) -> Result<()> {
    let mut found = Vec::<usize>::new();
    let mut not_found = String::new();

    for c in token.chars().skip(1) {
        match args.find_short(c) {
            Some(index) => found.push(index),
            None => not_found.push(c),
        }
    }

    if found.is_empty() {
        return Err(Error::UnknownOpt(token.into()));
    }

    if !not_found.is_empty() {
        return Err(Error::UnknownShortOpts(not_found));
    }

    // Repeating an option inside a cluster is harmless.
    found.sort_unstable();
    found.dedup();

    for &index in found.iter() {
        let arg = args.entry_mut(index);

        // Only set for entries found by short name.
        let short = arg.short_name().unwrap_or_default();

        if arg.parsed() {
            return Err(Error::AlreadyParsed(short.to_string()));
        }

        if !arg.kind().is_bundleable() {
            return Err(Error::NotBundleable(short));
        }
    }

    for index in found {
        let arg = args.entry_mut(index);

        arg.set_parsed();

        debug!("cluster {:?} matched {:?} ({:?})", token, arg.long_name(), arg.kind());

        let result = match arg.kind() {
            Kind::Flag => arg.call_flag(),
            Kind::Optional => arg.call_value(""),
            _ => {
                let default_value = arg.default_value().to_string();
                arg.call_value(&default_value)
            }
        };

        result.map_err(|e| handler_failed(token, e))?;
    }

    Ok(())
}

/// Run a single parse pass without reporting errors.
fn run<S>(tokens: &[S], args: &mut Args, options: &mut Options) -> Result<()>
where
    S: AsRef<str>,
{
    let settings = options.get_settings();

    args.reset();

    let positional_count = args.assign_positional_ordinals();
    let mut positionals_parsed = 0;

    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();

        if i == 0 && !settings.is_arg0_normal() {
            if tokens.len() == 1 && !settings.is_arguments_optional() {
                return Err(Error::NoArgs);
            }

            debug!("program name {:?}", token);

            options
                .handle_program_name(token)
                .map_err(|e| handler_failed(token, e))?;
        } else if HELP_OPTIONS.iter().any(|h| *h == token) {
            return Err(Error::HelpRequested);
        } else if is_named_option(token) {
            i = handle_named(tokens, i, args)?;
        } else if is_short_cluster(token) {
            handle_cluster(token, args)?;
        } else if positionals_parsed < positional_count {
            match args.find_positional(positionals_parsed) {
                Some(index) => {
                    let arg = args.entry_mut(index);

                    arg.set_parsed();
                    positionals_parsed += 1;

                    debug!("positional {:?} is {:?}", arg.long_name(), token);

                    arg.call_value(token).map_err(|e| handler_failed(token, e))?;
                }
                None => warn!(
                    "no positional argument with ordinal {}, ignoring {:?}",
                    positionals_parsed, token
                ),
            }
        } else {
            return Err(Error::Unrecognized(token.into()));
        }

        i += 1;
    }

    Ok(())
}

/// Display the diagnostic and help for a failed parse, then exit if
/// the settings ask for it.
fn report<W>(err: &Error, args: &Args, program_name: &str, options: &Options, writer: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let settings = options.get_settings();

    let written = write_report(err, args, program_name, options, writer);

    // Exit even if the writer failed.
    if settings.is_exit_on_error() {
        if let Err(e) = &written {
            warn!("cannot display help: {}", e);
        }

        process::exit(options.get_exit_code());
    }

    written
}

fn write_report<W>(
    err: &Error,
    args: &Args,
    program_name: &str,
    options: &Options,
    writer: &mut W,
) -> Result<()>
where
    W: Write + ?Sized,
{
    let settings = options.get_settings();

    if err.is_diagnostic() && !settings.is_quiet() {
        writeln!(writer, "{}.", err)?;
    }

    if !settings.is_no_help_on_error() {
        generate_help(args, program_name, options, &mut *writer)?;
    }

    writer.flush()?;

    Ok(())
}

/// Parse a set of command line arguments, writing any diagnostic and help
/// to `writer`.
///
/// # Arguments
///
/// - `tokens`: The arguments to parse. Unless [crate::Settings::arg0_is_normal]
///   is set, the first element is the program name.
/// - `args`: The registered arguments. Their parse state is reset first.
/// - `options`: Help text and behaviour settings.
/// - `writer`: Destination for diagnostics and help.
///
/// # Notes
///
/// - Callbacks are called as each argument is found, so side effects of
///   callbacks called before an error are not undone.
/// - If [crate::Settings::exit_on_error] is set, this function does not
///   return on error: the process exits.
pub fn try_parse_with_writer<S, W>(
    tokens: &[S],
    args: &mut Args,
    options: &mut Options,
    writer: &mut W,
) -> Result<()>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let err = match run(tokens, args, options) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    debug!("parse failed: {}", err);

    let program_name = match tokens.first() {
        Some(t) if !options.get_settings().is_arg0_normal() => t.as_ref(),
        _ => "",
    };

    if let Err(e) = report(&err, args, program_name, options, writer) {
        warn!("cannot display help: {}", e);
    }

    Err(err)
}

/// Parse a set of command line arguments, writing any diagnostic and help
/// to standard output.
pub fn try_parse<S>(tokens: &[S], args: &mut Args, options: &mut Options) -> Result<()>
where
    S: AsRef<str>,
{
    try_parse_with_writer(tokens, args, options, &mut std::io::stdout())
}

/// Parse a set of command line arguments.
///
/// Returns `true` if every argument was handled and no callback failed.
/// On failure, help has already been displayed (unless disabled).
pub fn parse<S>(tokens: &[S], args: &mut Args, options: &mut Options) -> bool
where
    S: AsRef<str>,
{
    try_parse(tokens, args, options).is_ok()
}

/// Simplest interface to the parser: parses the programs own arguments.
pub fn parse_env(args: &mut Args, options: &mut Options) -> bool {
    parse(&env_args(), args, options)
}
