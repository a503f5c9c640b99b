// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle positional arguments only.
use tabopt::{Arg, Args, Options, Result, Settings};

fn main() -> Result<()> {
    let mut words = Vec::<String>::new();

    let mut args = Args::new();

    for name in &["first", "second", "third"] {
        args.add(
            Arg::positional(name, |v| {
                println!("INFO: positional argument: {:?}", v);
                Ok(())
            })
            .help("A word."),
        );
    }

    args.add(
        Arg::multi("more", 8, |values| {
            words.extend(values.iter().map(|v| v.to_string()));
            Ok(())
        })
        .help("Up to 8 extra words."),
    );

    let mut options = Options::new()
        .intro("Prints its positional arguments.")
        .settings(Settings::new().arguments_optional().exit_on_error())
        .exit_code(2);

    // Exits with code 2 on failure.
    tabopt::try_parse(&tabopt::env_args(), &mut args, &mut options)?;

    drop(args);

    println!("INFO: extra words: {:?}", words);

    Ok(())
}
