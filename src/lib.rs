// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Table-driven parsing of command-line arguments.
//!
//! You describe every argument your program accepts in a table (an [Args]
//! value), attaching a callback to each one. The parser walks the
//! command-line, calls the matching callback for each argument it finds and
//! produces a help statement from the same table.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Terminology](#terminology)
//! * [Parsing rules](#parsing-rules)
//! * [Errors](#errors)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Quickstart
//!
//! 1. Create an [Args] variable to hold all the arguments you wish to
//!    support and add an [Arg] for each one. The [Arg] constructor you
//!    choose decides how many values the argument takes; the closure
//!    is called when the argument is found.
//!
//!    ```rust
//!    use tabopt::{Arg, Args};
//!
//!    let mut verbose = false;
//!    let mut output = String::new();
//!
//!    let mut args = Args::new();
//!
//!    // Support "--verbose" and "-v".
//!    args.add(
//!        Arg::flag("verbose", || {
//!            verbose = true;
//!            Ok(())
//!        })
//!        .short('v')
//!        .help("Display more details."),
//!    );
//!
//!    // Support "--output <value>" and "-o <value>".
//!    args.add(
//!        Arg::required("output", |v| {
//!            output = v.into();
//!            Ok(())
//!        })
//!        .short('o'),
//!    );
//!    ```
//!
//! 1. Create an [Options] variable to configure the parse (help text
//!    and [Settings]).
//!
//!    ```rust
//!    use tabopt::{Options, Settings};
//!
//!    let mut options = Options::new()
//!        .intro("My program.")
//!        .settings(Settings::new().arguments_optional());
//!    ```
//!
//! 1. Call [parse()] (or [try_parse()] to find out why parsing failed):
//!
//!    ```rust
//!    # use tabopt::{Arg, Args, Options, Settings};
//!    #
//!    # let mut verbose = false;
//!    # let mut args = Args::new();
//!    # args.add(Arg::flag("verbose", || { verbose = true; Ok(()) }).short('v'));
//!    # let mut options = Options::new().settings(Settings::new().arguments_optional());
//!    #
//!    let ok = tabopt::parse(&["prog", "-v"], &mut args, &mut options);
//!
//!    // Release the borrows held by the callbacks.
//!    drop(args);
//!
//!    assert!(ok);
//!    assert!(verbose);
//!    ```
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//!
//! use tabopt::{Arg, Args, Error, Options, Settings};
//!
//! let files = RefCell::new(Vec::<String>::new());
//! let mut level = String::new();
//! let mut tags = Vec::<String>::new();
//!
//! let mut args = Args::new();
//!
//! args.add(
//!     Arg::defaulted("level", "info", |v| {
//!         level = v.into();
//!         Ok(())
//!     })
//!     .short('l')
//!     .help("Logging level."),
//! );
//!
//! args.add(
//!     Arg::multi("tags", 3, |values| {
//!         tags = values.iter().map(|v| v.to_string()).collect();
//!         Ok(())
//!     })
//!     .short('t')
//!     .help("Up to three tags."),
//! );
//!
//! args.add(Arg::positional("input", |v| {
//!     files.borrow_mut().push(v.into());
//!     Ok(())
//! }));
//!
//! args.add(Arg::positional("output", |v| {
//!     if v.is_empty() {
//!         return Err(Error::HandlerError("empty output name".into()));
//!     }
//!
//!     files.borrow_mut().push(v.into());
//!     Ok(())
//! }));
//!
//! let mut options = Options::new().settings(Settings::new().quiet());
//!
//! let result = tabopt::try_parse(
//!     &["prog", "in.txt", "out.txt", "-l", "--tags", "a", "b"],
//!     &mut args,
//!     &mut options,
//! );
//!
//! drop(args);
//!
//! assert!(result.is_ok());
//! assert_eq!(level, "info");
//! assert_eq!(tags, vec!["a", "b"]);
//! assert_eq!(files.into_inner(), vec!["in.txt", "out.txt"]);
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -tM --required value in.txt
//! $ cargo run --example positional-args-only -- one two
//! $ cargo run --example error-handler -- --vowel x
//! ```
//!
//! # Terminology
//!
//! - An "option" is an argument that starts with a dash: either a short
//!   option (a dash and a single character, `-v`) or a long option
//!   (two dashes and a name, `--verbose`).
//!
//! - A "positional argument" is any other argument. Positional
//!   arguments are matched to the positional [Arg]'s in the order the
//!   [Arg]'s were added, wherever they appear on the command-line.
//!
//! - A "concatenated short cluster" is a dash followed by several short
//!   option names, `-vqx`, equivalent to `-v -q -x`.
//!
//! # Parsing rules
//!
//! Each command-line argument is classified in order:
//!
//! 1. The first argument is the program name, unless
//!    [Settings::arg0_is_normal] is set. If it is the only argument,
//!    parsing fails unless [Settings::arguments_optional] is set.
//! 1. `-h`, `--help` and `/?` display help (and are reported as a failure).
//! 1. `-x` and `--name` select an option. Long names are matched ignoring
//!    case; short names are not. The option then consumes values:
//!
//!    | [Kind] | values consumed |
//!    |---|---|
//!    | [Kind::Flag] | none |
//!    | [Kind::Required] | exactly one, which cannot start with a dash |
//!    | [Kind::Optional] | the next argument, unless it starts with a dash (the callback then gets `""`) |
//!    | [Kind::Defaulted] | as [Kind::Optional], but the callback gets the default value |
//!    | [Kind::Multi] | every following argument not starting with a dash, up to the declared maximum |
//!
//! 1. `-xyz` selects each of `x`, `y` and `z` by short name. Only
//!    [Kind::Flag], [Kind::Optional] and [Kind::Defaulted] options can be
//!    used this way. Callbacks are called in the order the options were
//!    added.
//! 1. Anything else fills the next positional argument.
//!
//! An option can only be specified once per parse.
//!
//! # Errors
//!
//! Any error stops parsing. The parser prints a description of the error
//! and the help statement (see [Settings::quiet] and
//! [Settings::no_help_on_error]), then returns the [Error] (or exits the
//! process, if [Settings::exit_on_error] is set). Callbacks called before
//! the error are not undone.
//!
//! # Limitations
//!
//! - Subcommands are not supported.
//! - Values cannot be attached with `=` (`--name=value`).
//! - Concatenated short clusters cannot supply values.
//! - Each parse resets the state recorded in the [Args], so the same
//!   table can be parsed again, but not from two threads at once.

mod args;
mod error;
mod help;
mod parser;
mod settings;

pub use error::{Error, Result};

pub use args::{Arg, Args, Callback, FlagFn, Kind, MultiFn, Shape, ValueFn, NO_SHORT_NAME};

pub use settings::{Options, ProgramNameFn, Settings, DEFAULT_EXIT_CODE};

pub use help::{generate_help, help_text, print_help};

pub use parser::{env_args, parse, parse_env, try_parse, try_parse_with_writer};
