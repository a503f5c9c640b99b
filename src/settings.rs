// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::error::Result;

/// Exit code used by [Settings::exit_on_error] unless
/// [Options::exit_code] is called.
pub const DEFAULT_EXIT_CODE: i32 = -1;

/// Callback for the program name (argument zero).
pub type ProgramNameFn<'a> = Box<dyn FnMut(&str) -> Result<()> + 'a>;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq, Hash)]
pub struct Settings {
    /// If set, don't display a diagnostic message describing the error
    /// (help is still shown).
    pub(crate) quiet: bool,

    /// If set, terminate the process on error rather than returning.
    pub(crate) exit_on_error: bool,

    /// If set, a command-line without any arguments is not an error.
    pub(crate) arguments_optional: bool,

    /// If set, the first argument is parsed like any other rather than
    /// being treated as the program name.
    pub(crate) arg0_is_normal: bool,

    /// If set, don't display help when an error occurs.
    pub(crate) no_help_on_error: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Don't print a message describing why parsing failed.
    pub fn quiet(self) -> Self {
        Settings {
            quiet: true,
            ..self
        }
    }

    /// Terminate the process with the configured exit code
    /// (see [Options::exit_code]) when parsing fails.
    ///
    /// # Note
    ///
    /// Without this setting, the parser never exits: the caller decides
    /// what to do with the result.
    pub fn exit_on_error(self) -> Self {
        Settings {
            exit_on_error: true,
            ..self
        }
    }

    /// Accept a command-line that only contains the program name. The
    /// usage line also shows the positional arguments as optional.
    pub fn arguments_optional(self) -> Self {
        Settings {
            arguments_optional: true,
            ..self
        }
    }

    /// Treat the first argument as a normal argument rather than the
    /// program name. Useful when parsing a synthetic argument list.
    pub fn arg0_is_normal(self) -> Self {
        Settings {
            arg0_is_normal: true,
            ..self
        }
    }

    /// Don't display help when parsing fails.
    pub fn no_help_on_error(self) -> Self {
        Settings {
            no_help_on_error: true,
            ..self
        }
    }

    /// Returns `true` if [Settings::quiet] was set.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Returns `true` if [Settings::exit_on_error] was set.
    pub fn is_exit_on_error(&self) -> bool {
        self.exit_on_error
    }

    /// Returns `true` if [Settings::arguments_optional] was set.
    pub fn is_arguments_optional(&self) -> bool {
        self.arguments_optional
    }

    /// Returns `true` if [Settings::arg0_is_normal] was set.
    pub fn is_arg0_normal(&self) -> bool {
        self.arg0_is_normal
    }

    /// Returns `true` if [Settings::no_help_on_error] was set.
    pub fn is_no_help_on_error(&self) -> bool {
        self.no_help_on_error
    }
}

/// Options for a single parse.
///
/// Holds the text shown around the generated help, the parser
/// [Settings], and an optional handler for the program name.
#[derive(Default)]
pub struct Options<'a> {
    pub(crate) intro: String,
    pub(crate) outro: String,
    pub(crate) settings: Settings,
    pub(crate) exit_code: Option<i32>,
    pub(crate) program_name_handler: Option<ProgramNameFn<'a>>,
}

impl<'a> Options<'a> {
    /// Create a new options object.
    pub fn new() -> Self {
        Options::default()
    }

    /// Specify text displayed before the usage statement.
    pub fn intro(self, intro: &str) -> Self {
        Options {
            intro: intro.into(),
            ..self
        }
    }

    /// Specify text displayed after the list of options.
    pub fn outro(self, outro: &str) -> Self {
        Options {
            outro: outro.into(),
            ..self
        }
    }

    /// Specify any settings for the parse.
    pub fn settings(self, settings: Settings) -> Self {
        Options { settings, ..self }
    }

    /// Specify the code to exit with if [Settings::exit_on_error] is set.
    pub fn exit_code(self, exit_code: i32) -> Self {
        Options {
            exit_code: Some(exit_code),
            ..self
        }
    }

    /// Specify a handler that is called with the program name.
    pub fn program_name_handler<F>(self, f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Options {
            program_name_handler: Some(Box::new(f)),
            ..self
        }
    }

    /// Returns the current settings.
    pub fn get_settings(&self) -> Settings {
        self.settings
    }

    /// Returns the exit code used by [Settings::exit_on_error].
    pub fn get_exit_code(&self) -> i32 {
        self.exit_code.unwrap_or(DEFAULT_EXIT_CODE)
    }

    pub(crate) fn handle_program_name(&mut self, name: &str) -> Result<()> {
        match self.program_name_handler.as_mut() {
            Some(f) => f(name),
            None => Ok(()),
        }
    }
}

impl<'a> fmt::Debug for Options<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Options")
            .field("intro", &self.intro)
            .field("outro", &self.outro)
            .field("settings", &self.settings)
            .field("exit_code", &self.get_exit_code())
            .field(
                "program_name_handler",
                &self.program_name_handler.as_ref().map(|_| "FnMut"),
            )
            .finish()
    }
}
