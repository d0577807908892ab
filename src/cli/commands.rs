//! Command dispatch for the CLI
//!
//! The first argument picks the behavior, compared case-insensitively.
//! Handler errors are user-facing text written to the same stream as
//! normal output; only I/O failures come back as `Err`.

use crate::{
    config::Config,
    core::{self, text},
    error,
    utils::EnvironmentInfo,
};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, instrument, warn};

const HELP_ALIASES: [&str; 3] = ["--help", "-h", "-?"];
const VERSION_FLAG: &str = "--version";

/// Commands that take operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Greet,
    Sum,
    Echo,
}

impl CommandKind {
    /// Static lookup table from command word to command
    const TABLE: [(&'static str, Self); 3] = [
        ("greet", Self::Greet),
        ("sum", Self::Sum),
        ("echo", Self::Echo),
    ];

    /// Look up an already-lowercased command word
    pub fn from_word(word: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, kind)| *kind)
    }

    /// The command word
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greet => "greet",
            Self::Sum => "sum",
            Self::Echo => "echo",
        }
    }

    /// Operand placeholder shown in the usage line
    pub const fn operands_hint(self) -> &'static str {
        match self {
            Self::Greet => "<name>",
            Self::Sum => "<numbers...>",
            Self::Echo => "<text...>",
        }
    }

    /// Usage line printed after an error
    pub fn usage(self, program: &str) -> String {
        format!("Usage: {program} {} {}", self.name(), self.operands_hint())
    }

    fn handle(self, operands: &[String]) -> error::Result<String> {
        match self {
            Self::Greet => core::greet(operands),
            Self::Sum => core::sum(operands),
            Self::Echo => core::echo(operands),
        }
    }
}

/// What a single run of the program was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all
    Default,
    Help,
    Version,
    /// A known command and everything after the command word
    Run {
        command: CommandKind,
        operands: Vec<String>,
    },
    /// First argument, in its original case
    Unknown(String),
}

impl Invocation {
    /// Classify the argument list (program name excluded)
    pub fn parse(arguments: &[String]) -> Self {
        let Some((first, rest)) = arguments.split_first() else {
            return Self::Default;
        };
        let word = first.to_lowercase();

        if HELP_ALIASES.contains(&word.as_str()) {
            return Self::Help;
        }
        if word == VERSION_FLAG {
            return Self::Version;
        }

        match CommandKind::from_word(&word) {
            Some(command) => Self::Run {
                command,
                operands: rest.to_vec(),
            },
            None => Self::Unknown(first.clone()),
        }
    }
}

/// How a run ended. The process exit status is 0 for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// A handler rejected its arguments and printed an error
    InputError,
    UnknownCommand,
}

/// Parse the arguments and execute the resulting invocation
pub fn run(
    arguments: &[String],
    config: &Config,
    env: &dyn EnvironmentInfo,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let invocation = Invocation::parse(arguments);
    execute_command(&invocation, config, env, out)
}

/// Execute an invocation, writing everything it prints to `out`
#[instrument(skip(config, env, out))]
pub fn execute_command(
    invocation: &Invocation,
    config: &Config,
    env: &dyn EnvironmentInfo,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let outcome = match invocation {
        Invocation::Default => {
            print(out, &text::default_message(config, env))?;
            Outcome::Completed
        }
        Invocation::Help => {
            print(out, &text::help_text(config))?;
            Outcome::Completed
        }
        Invocation::Version => {
            print(out, &config.version_line())?;
            Outcome::Completed
        }
        Invocation::Run { command, operands } => {
            execute_handler(*command, operands, config, out)?
        }
        Invocation::Unknown(word) => {
            warn!("Unknown command: {}", word);
            print(out, &format!("Unknown command: {word}"))?;
            print(out, "Tip: Run with --help to see available commands.")?;
            Outcome::UnknownCommand
        }
    };

    debug!(?outcome, "Command finished");
    Ok(outcome)
}

fn execute_handler(
    command: CommandKind,
    operands: &[String],
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    match command.handle(operands) {
        Ok(line) => {
            print(out, &line)?;
            Ok(Outcome::Completed)
        }
        Err(e) => {
            warn!("{} rejected its arguments: {}", command.name(), e);
            print(out, &format!("Error: {e}"))?;
            print(out, &command.usage(&config.program))?;
            Ok(Outcome::InputError)
        }
    }
}

fn print(out: &mut dyn Write, text: &str) -> anyhow::Result<()> {
    writeln!(out, "{text}").context("Failed to write to standard output")
}
