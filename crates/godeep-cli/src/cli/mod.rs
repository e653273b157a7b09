mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::GenerateParams;

/// Formatter selected with `--formatter`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatterChoice {
    #[default]
    Builtin,
    Gofmt,
}

impl FormatterChoice {
    pub fn formatter(self) -> Box<dyn godeep_gen::SourceFormatter> {
        match self {
            FormatterChoice::Builtin => Box::new(godeep_gen::Canonical),
            FormatterChoice::Gofmt => Box::new(godeep_gen::Gofmt::new()),
        }
    }
}
