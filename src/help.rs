// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Write;

use crate::args::{Arg, Args, Kind};
use crate::error::Result;
use crate::settings::Options;

/// Space before every argument line.
const FIRST_SPACE: usize = 1;

/// Width of the short option column (`-x, `).
const SHORT_WIDTH: usize = 4;

/// Space after the longest long option label.
const LONG_SPACE: usize = 2;

/// Long option labels wider than this wrap onto their own line.
const LONG_WIDTH_MAX: usize = 30;

/// Space after the longest positional argument name.
const POSITIONAL_SPACE: usize = 4;

const LONG_PREFIX: &str = "--";

const REQUIRED_STR: &str = " <value>";
const OPTIONAL_STR: &str = " <optional>";
const MULTI_STR: &str = " <multiple>";
const DEFAULT_BEGIN: &str = " <=";
const DEFAULT_END: &str = ">";

const HELP_SHORT: &str = "-h,";
const HELP_LONG: &str = "--help";
const HELP_DESCRIPTION: &str = "Print this help";

fn width(s: &str) -> usize {
    s.chars().count()
}

/// The `--name <...>` label shown for an option.
fn long_label(arg: &Arg) -> String {
    let suffix = match arg.kind() {
        Kind::Required => REQUIRED_STR.to_string(),
        Kind::Optional => OPTIONAL_STR.to_string(),
        Kind::Defaulted => format!("{}{}{}", DEFAULT_BEGIN, arg.default_value(), DEFAULT_END),
        Kind::Multi => MULTI_STR.to_string(),
        Kind::Flag | Kind::Positional => String::new(),
    };

    format!("{}{}{}", LONG_PREFIX, arg.long_name(), suffix)
}

/// Format a description, indenting every line after the first.
fn describe(description: &str, indent: usize) -> String {
    let padding = " ".repeat(indent);

    description
        .trim_end_matches('\n')
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{}{}", padding, line)
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn usage_line(args: &Args, program_name: &str, options: &Options) -> String {
    let mut words = Vec::<String>::new();

    if !program_name.is_empty() {
        words.push(program_name.into());
    }

    let positionals: Vec<&str> = args
        .iter()
        .filter(|a| a.kind() == Kind::Positional)
        .map(|a| a.long_name())
        .collect();

    if !positionals.is_empty() {
        let names = positionals.join(" ");

        if options.settings.is_arguments_optional() {
            words.push(format!("[{}]", names));
        } else {
            words.push(names);
        }
    }

    words.push("[options]".into());

    format!("Usage: {}", words.join(" "))
}

fn positional_lines(args: &Args) -> Vec<String> {
    let name_width = args
        .iter()
        .filter(|a| a.kind() == Kind::Positional)
        .map(|a| width(a.long_name()) + POSITIONAL_SPACE)
        .max();

    let name_width = match name_width {
        Some(w) => w,
        None => return Vec::new(),
    };

    let mut lines = vec!["Arguments:".to_string()];

    for arg in args.iter().filter(|a| a.kind() == Kind::Positional) {
        let line = format!(
            "{:first$}{:<name_width$}{}",
            "",
            arg.long_name(),
            describe(arg.description(), FIRST_SPACE + name_width),
            first = FIRST_SPACE,
            name_width = name_width,
        );

        lines.push(line.trim_end().into());
    }

    lines.push(String::new());

    lines
}

fn option_lines(args: &Args) -> Vec<String> {
    let mut lines = vec!["Options:".to_string()];

    let label_width = args
        .iter()
        .filter(|a| a.kind() != Kind::Positional)
        .map(|a| width(&long_label(a)) + LONG_SPACE)
        .max()
        .unwrap_or(0)
        .min(LONG_WIDTH_MAX);

    let description_column = FIRST_SPACE + SHORT_WIDTH + label_width;

    for arg in args.iter().filter(|a| a.kind() != Kind::Positional) {
        let short = match arg.short_name() {
            Some(c) => format!("-{},", c),
            None => String::new(),
        };

        let label = long_label(arg);

        let mut line = format!(
            "{:first$}{:<short_width$}{:<label_width$}",
            "",
            short,
            label,
            first = FIRST_SPACE,
            short_width = SHORT_WIDTH,
            label_width = label_width,
        );

        // Label too wide: description goes on the next line.
        if width(&label) >= label_width && !arg.description().is_empty() {
            lines.push(line.trim_end().into());
            line = " ".repeat(description_column);
        }

        line.push_str(&describe(arg.description(), description_column));

        lines.push(line.trim_end().into());
    }

    // No options, so only "--help" needs to fit.
    let label_width = if label_width == 0 {
        width(HELP_LONG) + LONG_SPACE
    } else {
        label_width
    };

    lines.push(format!(
        "{:first$}{:<short_width$}{:<label_width$}{}",
        "",
        HELP_SHORT,
        HELP_LONG,
        HELP_DESCRIPTION,
        first = FIRST_SPACE,
        short_width = SHORT_WIDTH,
        label_width = label_width,
    ));

    lines
}

/// Generate the help/usage statement for the registered [Arg]'s.
///
/// `program_name` is shown in the usage line (omitted if empty).
/// The catalog is not modified.
pub fn help_text(args: &Args, program_name: &str, options: &Options) -> String {
    let mut lines = Vec::<String>::new();

    if !options.intro.is_empty() {
        lines.push(options.intro.trim_end().into());
        lines.push(String::new());
    }

    lines.push(usage_line(args, program_name, options));
    lines.push(String::new());

    lines.extend(positional_lines(args));
    lines.extend(option_lines(args));

    if !options.outro.is_empty() {
        lines.push(String::new());
        lines.push(options.outro.trim_end().into());
    }

    let mut text = lines.join("\n");
    text.push('\n');

    text
}

/// Write the help/usage statement to `writer`.
///
/// This is called automatically by the parser on error or when the user
/// specifies `-h`, `--help` or `/?`; you do not need to register an [Arg]
/// for help.
pub fn generate_help<W>(
    args: &Args,
    program_name: &str,
    options: &Options,
    writer: &mut W,
) -> Result<()>
where
    W: Write + ?Sized,
{
    write!(writer, "{}", help_text(args, program_name, options))?;
    writer.flush()?;

    Ok(())
}

/// Write the help/usage statement to standard output.
///
/// Can be called at any time, independently of parsing.
pub fn print_help(args: &Args, program_name: &str, options: &Options) -> Result<()> {
    generate_help(args, program_name, options, &mut std::io::stdout())
}
