// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use log::trace;

use crate::error::Result;

/// Value used to denote "no short option name".
pub const NO_SHORT_NAME: char = '\0';

/// Callback for options that take no value.
pub type FlagFn<'a> = Box<dyn FnMut() -> Result<()> + 'a>;

/// Callback for options (and positional arguments) that take one value.
pub type ValueFn<'a> = Box<dyn FnMut(&str) -> Result<()> + 'a>;

/// Callback for options that take zero or more values.
pub type MultiFn<'a> = Box<dyn FnMut(&[&str]) -> Result<()> + 'a>;

/// The type of an [Arg]: decides how many values it consumes and
/// how it is matched on the command-line.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Kind {
    /// Option is stand-alone (no value).
    Flag,
    /// Option must be followed by exactly one value.
    Required,
    /// Option may be followed by one value; an empty value is passed
    /// if it is not.
    Optional,
    /// Like [Kind::Optional], but passes the default value of the
    /// [Arg] if no value follows.
    Defaulted,
    /// Option consumes every following non-option token, up to a
    /// declared maximum.
    Multi,
    /// Not an option: matched against bare tokens in declaration order.
    Positional,
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Flag
    }
}

/// The call shape a [Callback] has.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Shape {
    /// No argument.
    Flag,
    /// Single string argument.
    Value,
    /// Slice of string arguments.
    Multi,
}

impl Kind {
    /// Returns the callback shape an [Arg] of this kind requires.
    pub fn shape(self) -> Shape {
        match self {
            Kind::Flag => Shape::Flag,
            Kind::Multi => Shape::Multi,
            Kind::Required | Kind::Optional | Kind::Defaulted | Kind::Positional => Shape::Value,
        }
    }

    /// Returns `true` if options of this kind may appear in a
    /// concatenated short option cluster such as `-abc`.
    pub fn is_bundleable(self) -> bool {
        matches!(self, Kind::Flag | Kind::Optional | Kind::Defaulted)
    }
}

/// The function called when an [Arg] is found on the command-line.
///
/// Returning an error from the callback stops the parse.
pub enum Callback<'a> {
    /// For [Kind::Flag].
    Flag(FlagFn<'a>),
    /// For [Kind::Required], [Kind::Optional], [Kind::Defaulted] and
    /// [Kind::Positional].
    Value(ValueFn<'a>),
    /// For [Kind::Multi].
    Multi(MultiFn<'a>),
}

impl<'a> Callback<'a> {
    /// Create a no-argument callback.
    pub fn flag<F>(f: F) -> Self
    where
        F: FnMut() -> Result<()> + 'a,
    {
        Callback::Flag(Box::new(f))
    }

    /// Create a single-value callback.
    pub fn value<F>(f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Callback::Value(Box::new(f))
    }

    /// Create a multi-value callback.
    pub fn multi<F>(f: F) -> Self
    where
        F: FnMut(&[&str]) -> Result<()> + 'a,
    {
        Callback::Multi(Box::new(f))
    }

    /// Returns the call shape of the callback.
    pub fn shape(&self) -> Shape {
        match self {
            Callback::Flag(_) => Shape::Flag,
            Callback::Value(_) => Shape::Value,
            Callback::Multi(_) => Shape::Multi,
        }
    }
}

impl<'a> fmt::Debug for Callback<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Callback::{:?}", self.shape())
    }
}

/// An argument: either an option or a positional argument.
///
/// Created once by the caller and registered in [Args]. Everything is
/// fixed at construction, except for the per-pass state the parser
/// records (whether the argument was parsed and, for positional
/// arguments, its ordinal).
#[derive(Debug)]
pub struct Arg<'a> {
    long_name: String,
    short_name: char,
    kind: Kind,
    description: String,
    default_value: String,
    max_values: usize,
    callback: Callback<'a>,

    //----------------------------------------
    // The following are set by the parser.
    //----------------------------------------
    parsed: bool,
    positional_ordinal: Option<usize>,
}

impl<'a> Arg<'a> {
    /// Create a new argument.
    ///
    /// # Panics
    ///
    /// Panics if `long_name` is empty or contains whitespace, or if
    /// the shape of `callback` does not match `kind`.
    pub fn new(long_name: &str, kind: Kind, callback: Callback<'a>) -> Self {
        assert!(!long_name.is_empty(), "argument name cannot be empty");
        assert!(
            !long_name.chars().any(char::is_whitespace),
            "argument name {:?} cannot contain whitespace",
            long_name
        );
        assert_eq!(
            kind.shape(),
            callback.shape(),
            "callback does not match argument kind {:?} for {:?}",
            kind,
            long_name
        );

        Arg {
            long_name: long_name.into(),
            short_name: NO_SHORT_NAME,
            kind,
            description: String::new(),
            default_value: String::new(),
            max_values: 0,
            callback,
            parsed: false,
            positional_ordinal: None,
        }
    }

    /// Create a flag option.
    pub fn flag<F>(long_name: &str, f: F) -> Self
    where
        F: FnMut() -> Result<()> + 'a,
    {
        Arg::new(long_name, Kind::Flag, Callback::flag(f))
    }

    /// Create an option that requires a value.
    pub fn required<F>(long_name: &str, f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Arg::new(long_name, Kind::Required, Callback::value(f))
    }

    /// Create an option with an optional value.
    pub fn optional<F>(long_name: &str, f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Arg::new(long_name, Kind::Optional, Callback::value(f))
    }

    /// Create an option with an optional value that falls back to
    /// `default_value`.
    pub fn defaulted<F>(long_name: &str, default_value: &str, f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Arg {
            default_value: default_value.into(),
            ..Arg::new(long_name, Kind::Defaulted, Callback::value(f))
        }
    }

    /// Create an option accepting up to `max_values` values.
    pub fn multi<F>(long_name: &str, max_values: usize, f: F) -> Self
    where
        F: FnMut(&[&str]) -> Result<()> + 'a,
    {
        Arg {
            max_values,
            ..Arg::new(long_name, Kind::Multi, Callback::multi(f))
        }
    }

    /// Create a positional argument.
    pub fn positional<F>(long_name: &str, f: F) -> Self
    where
        F: FnMut(&str) -> Result<()> + 'a,
    {
        Arg::new(long_name, Kind::Positional, Callback::value(f))
    }

    /// Specify the short option name. [NO_SHORT_NAME] means none.
    pub fn short(self, short_name: char) -> Self {
        Arg { short_name, ..self }
    }

    /// Specify the help text. Lines are separated by `\n`.
    pub fn help(self, description: &str) -> Self {
        Arg {
            description: description.into(),
            ..self
        }
    }

    /// Long option name (or positional argument name).
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Short option name, if any.
    pub fn short_name(&self) -> Option<char> {
        match self.short_name {
            NO_SHORT_NAME => None,
            c => Some(c),
        }
    }

    /// Type of the argument.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Help text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Value passed to the callback of a [Kind::Defaulted] option
    /// when no value is given.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Maximum number of values of a [Kind::Multi] option.
    pub fn max_values(&self) -> usize {
        self.max_values
    }

    /// Set once the argument has been handled in the current pass.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Position of a [Kind::Positional] argument amongst the other
    /// positional arguments. Assigned by the parser.
    pub fn positional_ordinal(&self) -> Option<usize> {
        self.positional_ordinal
    }

    pub(crate) fn set_parsed(&mut self) {
        self.parsed = true;
    }

    pub(crate) fn matches_long(&self, name: &str) -> bool {
        self.long_name.eq_ignore_ascii_case(name)
    }

    pub(crate) fn matches_short(&self, c: char) -> bool {
        self.short_name != NO_SHORT_NAME && self.short_name == c
    }

    pub(crate) fn call_flag(&mut self) -> Result<()> {
        match &mut self.callback {
            Callback::Flag(f) => f(),
            _ => unreachable!("shape checked in Arg::new()"),
        }
    }

    pub(crate) fn call_value(&mut self, value: &str) -> Result<()> {
        match &mut self.callback {
            Callback::Value(f) => f(value),
            _ => unreachable!("shape checked in Arg::new()"),
        }
    }

    pub(crate) fn call_multi(&mut self, values: &[&str]) -> Result<()> {
        match &mut self.callback {
            Callback::Multi(f) => f(values),
            _ => unreachable!("shape checked in Arg::new()"),
        }
    }
}

/// Represents an ordered collection of arguments (the catalog).
#[derive(Debug, Default)]
pub struct Args<'a> {
    entries: Vec<Arg<'a>>,
}

impl<'a> Args<'a> {
    /// Create a new argument collection.
    pub fn new() -> Self {
        Args {
            entries: Vec::new(),
        }
    }

    /// Register a single argument.
    pub fn add(&mut self, arg: Arg<'a>) {
        self.entries.push(arg);
    }

    /// Returns the number of registered arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no arguments have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the arguments in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arg<'a>> {
        self.entries.iter()
    }

    /// Determine if an [Arg] with the specified long name has been
    /// registered (names are compared case-insensitively).
    pub fn exists(&self, long_name: &str) -> bool {
        self.get(long_name).is_some()
    }

    /// Returns the first [Arg] with the specified long name.
    pub fn get(&self, long_name: &str) -> Option<&Arg<'a>> {
        self.entries.iter().find(|a| a.matches_long(long_name))
    }

    /// Clear the state recorded by a previous parse.
    ///
    /// The parser calls this at the start of every pass.
    pub fn reset(&mut self) {
        for arg in self.entries.iter_mut() {
            arg.parsed = false;
            arg.positional_ordinal = None;
        }
    }

    /// Number the [Kind::Positional] arguments in declaration order.
    ///
    /// Returns the number of positional arguments.
    pub fn assign_positional_ordinals(&mut self) -> usize {
        let mut count = 0;

        for arg in self
            .entries
            .iter_mut()
            .filter(|a| a.kind == Kind::Positional)
        {
            trace!("positional {:?} has ordinal {}", arg.long_name, count);
            arg.positional_ordinal = Some(count);
            count += 1;
        }

        count
    }

    pub(crate) fn entry(&self, index: usize) -> &Arg<'a> {
        &self.entries[index]
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut Arg<'a> {
        &mut self.entries[index]
    }

    /// Index of the first option whose long name matches
    /// (positional arguments are never matched by name).
    pub(crate) fn find_long(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|a| a.kind != Kind::Positional && a.matches_long(name))
    }

    /// Index of the first argument whose short name matches.
    pub(crate) fn find_short(&self, c: char) -> Option<usize> {
        self.entries.iter().position(|a| a.matches_short(c))
    }

    /// Index of the positional argument with the specified ordinal.
    pub(crate) fn find_positional(&self, ordinal: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|a| a.positional_ordinal == Some(ordinal))
    }
}

impl<'a, 'b> IntoIterator for &'b Args<'a> {
    type Item = &'b Arg<'a>;
    type IntoIter = std::slice::Iter<'b, Arg<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
