//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::FormatterChoice;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub package: Option<PathBuf>,
    pub types: Vec<String>,
    pub skips: Vec<String>,
    pub pointer_receiver: bool,
    pub output: Option<PathBuf>,
    pub method_name: String,
    pub formatter: FormatterChoice,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            package: m.get_one::<PathBuf>("package").cloned(),
            types: strings(m, "type"),
            skips: strings(m, "skip"),
            pointer_receiver: m.get_flag("pointer_receiver"),
            output: m.get_one::<PathBuf>("output").cloned(),
            method_name: m
                .get_one::<String>("method_name")
                .cloned()
                .unwrap_or_else(|| godeep_gen::DEFAULT_METHOD_NAME.to_string()),
            formatter: parse_formatter(m),
            verbose: m.get_count("verbose"),
        }
    }

    /// Convert to command args, recording the command line for the file header.
    pub fn into_args(self, invocation: String) -> GenerateArgs {
        GenerateArgs {
            package: self.package,
            types: self.types,
            skips: self.skips,
            pointer_receiver: self.pointer_receiver,
            // `-` means stdout, same as no output at all.
            output: self.output.filter(|p| p.as_os_str() != "-"),
            method_name: self.method_name,
            formatter: self.formatter,
            invocation,
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_formatter(m: &ArgMatches) -> FormatterChoice {
    match m.get_one::<String>("formatter").map(|s| s.as_str()) {
        Some("gofmt") => FormatterChoice::Gofmt,
        _ => FormatterChoice::Builtin,
    }
}
