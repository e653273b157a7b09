//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` composed into the command in
//! `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use godeep_gen::DEFAULT_METHOD_NAME;

/// Environment file, directory or `-` (positional).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .value_name("PACKAGE")
        .value_parser(value_parser!(PathBuf))
        .help("Environment JSON file, directory containing godeep.json, or - for stdin")
}

/// Type to generate for (-t/--type), repeatable.
pub fn type_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Type to generate a copy method for (repeatable)")
}

/// Skipped selectors (-s/--skip), paired with --type by position.
pub fn skip_arg() -> Arg {
    Arg::new("skip")
        .short('s')
        .long("skip")
        .value_name("SELECTORS")
        .action(ArgAction::Append)
        .help("Comma-separated selectors to leave shallow, one list per --type")
}

/// Pointer receivers (--pointer-receiver).
pub fn pointer_receiver_arg() -> Arg {
    Arg::new("pointer_receiver")
        .long("pointer-receiver")
        .action(ArgAction::SetTrue)
        .help("Generate methods on *T returning *T")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (stdout if omitted or -)")
}

/// Copy method name (--method-name).
pub fn method_name_arg() -> Arg {
    Arg::new("method_name")
        .long("method-name")
        .value_name("NAME")
        .default_value(DEFAULT_METHOD_NAME)
        .help("Name of the generated method, also called on nested types that have it")
}

/// Formatter (--formatter).
pub fn formatter_arg() -> Arg {
    Arg::new("formatter")
        .long("formatter")
        .value_name("FORMATTER")
        .default_value("builtin")
        .value_parser(["builtin", "gofmt"])
        .help("Formatter applied to the generated file")
}

/// Verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
