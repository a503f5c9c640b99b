// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example registering one argument of every kind.
use std::cell::RefCell;
use std::process::exit;

use tabopt::{Arg, Args, Options};

/// State the callbacks update.
#[derive(Clone, Debug, Default)]
struct Config {
    test: bool,
    m: bool,
    a: bool,
    required: String,
    optional: Option<String>,
    default: Option<String>,
    multi: Vec<String>,
    files: Vec<String>,
}

fn main() {
    let config = RefCell::new(Config::default());

    println!("INFO: Initial config: {:?}", config.borrow());

    let mut args = Args::new();

    args.add(
        Arg::flag("test", || {
            config.borrow_mut().test = true;
            Ok(())
        })
        .short('t')
        .help("This is a simple flag."),
    );
    args.add(
        Arg::flag("M", || {
            config.borrow_mut().m = true;
            Ok(())
        })
        .short('M')
        .help("This is a simple flag."),
    );
    args.add(
        Arg::flag("A", || {
            config.borrow_mut().a = true;
            Ok(())
        })
        .short('a')
        .help("This is a simple flag."),
    );
    args.add(
        Arg::required("required", |v| {
            config.borrow_mut().required = v.into();
            Ok(())
        })
        .short('r')
        .help("This argument requires a value."),
    );
    args.add(
        Arg::optional("optional", |v| {
            config.borrow_mut().optional = Some(v.into());
            Ok(())
        })
        .short('o')
        .help("This parameter has an optional argument."),
    );
    args.add(
        Arg::defaulted("default", "my_default_val", |v| {
            config.borrow_mut().default = Some(v.into());
            Ok(())
        })
        .short('d')
        .help("An example of an argument with default value."),
    );
    args.add(
        Arg::multi("multi", 3, |values| {
            config.borrow_mut().multi = values.iter().map(|v| v.to_string()).collect();
            Ok(())
        })
        .short('m')
        .help(
            "This accepts 3 space separated values.\n\
             Long descriptions are aligned\n\
             when split with newlines.",
        ),
    );
    args.add(
        Arg::positional("in_file", |v| {
            config.borrow_mut().files.push(v.into());
            Ok(())
        })
        .help("Description for file 1.\nIt can be multiple\nlines too."),
    );
    args.add(
        Arg::positional("out_file", |v| {
            config.borrow_mut().files.push(v.into());
            Ok(())
        })
        .help("Description for out_file."),
    );

    let mut options = Options::new()
        .intro("A wonderful example.")
        .outro("Run with -h for this help.")
        .program_name_handler(|name| {
            println!("INFO: program name: {:?}", name);
            Ok(())
        });

    // Parse the command-line
    let ok = tabopt::parse_env(&mut args, &mut options);

    // XXX: essential! The callbacks borrow the config.
    drop(args);

    if !ok {
        exit(1);
    }

    println!("INFO: Final config: {:?}", config.borrow());
}
