mod cli;
mod commands;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);

    init_tracing(params.verbose);

    let invocation = std::env::args().collect::<Vec<_>>().join(" ");
    commands::generate::run(params.into_args(invocation));
}

/// Log to stderr. `RUST_LOG` wins when set; otherwise `-v` raises the level
/// from warnings to info, debug and trace.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}
