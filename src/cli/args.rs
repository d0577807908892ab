//! Command-line argument collection
//!
//! clap only gathers the raw words here. Its own `--help`/`--version`
//! handling is switched off because those flags, like the command words,
//! are matched case-insensitively by the dispatcher. An escape `--` is put
//! in front of the user's words so a literal `--` reaches the dispatcher too.

use clap::Parser;
use std::{env, ffi::OsString, iter};

/// CliDemo - a simple command-line utility
#[derive(Parser, Debug)]
#[command(name = "clidemo", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Command word followed by its arguments
    #[arg(value_name = "ARGS", num_args = 0.., value_parser = clap::value_parser!(OsString))]
    pub arguments: Vec<OsString>,
}

impl Args {
    /// Parse a full argv (program name first) without interpreting any word
    pub fn try_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(escape_arguments(argv))
    }

    /// The arguments as text; invalid UTF-8 becomes U+FFFD
    pub fn words(&self) -> Vec<String> {
        self.arguments
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse_from(escape_arguments(env::args_os()))
}

fn escape_arguments<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let program = argv.next().unwrap_or_else(|| OsString::from("clidemo"));
    iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}
