use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use godeep_core::JsonLoader;
use godeep_gen::{Config, Error, Result, pair_requests};

use crate::cli::FormatterChoice;

pub struct GenerateArgs {
    pub package: Option<PathBuf>,
    pub types: Vec<String>,
    pub skips: Vec<String>,
    pub pointer_receiver: bool,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub method_name: String,
    pub formatter: FormatterChoice,
    pub invocation: String,
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        if let Error::Formatting { text, .. } = &e {
            eprintln!("source:");
            eprint!("{}", text);
        }
        std::process::exit(1);
    }
}

/// Generate and write the file. The destination is only opened once the
/// generated text is complete.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let package = validate(args).map_err(|msg| Error::Config(msg.to_string()))?;

    let requests = pair_requests(&args.types, &args.skips);
    let config = Config::new()
        .pointer_receiver(args.pointer_receiver)
        .method_name(args.method_name.as_str())
        .invocation(args.invocation.as_str());
    let formatter = args.formatter.formatter();

    let source = godeep_gen::run(&JsonLoader, package, &requests, config, formatter.as_ref())?;

    match &args.output {
        Some(path) => write_file(path, &source),
        None => write_stdout(&source),
    }
}

fn validate(args: &GenerateArgs) -> std::result::Result<&Path, &'static str> {
    if args.types.first().is_none_or(|t| t.trim().is_empty()) {
        return Err("no type given");
    }
    args.package.as_deref().ok_or("no package path given")
}

fn write_file(path: &Path, source: &str) -> Result<()> {
    let output_error = |source: io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(output_error)?;
    file.write_all(source.as_bytes()).map_err(output_error)?;
    file.flush().map_err(output_error)?;

    tracing::info!(path = %path.display(), bytes = source.len(), "wrote generated code");
    Ok(())
}

fn write_stdout(source: &str) -> Result<()> {
    let output_error = |source: io::Error| Error::Output {
        path: PathBuf::from("-"),
        source,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(source.as_bytes()).map_err(output_error)?;
    stdout.flush().map_err(output_error)?;

    tracing::info!(bytes = source.len(), "wrote generated code to stdout");
    Ok(())
}
