// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to return an error from a callback.
use tabopt::{Arg, Args, Error, Options, Settings};

fn main() {
    let mut args = Args::new();

    args.add(
        Arg::required("vowel", |v| match v {
            // Only accept vowels.
            "a" | "e" | "i" | "o" | "u" => Ok(()),

            // Reject any other values.
            _ => Err(Error::HandlerError(format!("{:?} not a vowel", v))),
        })
        .short('v')
        .help("A vowel."),
    );

    let mut options = Options::new().settings(Settings::new().no_help_on_error());

    // Parse the command-line
    match tabopt::try_parse(&tabopt::env_args(), &mut args, &mut options) {
        Ok(()) => println!("INFO: ok"),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
