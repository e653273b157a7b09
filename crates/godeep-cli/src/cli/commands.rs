//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("godeep")
        .about("Generate deep-copy methods for Go types")
        .override_usage(
            "\
  godeep -t <NAME> [-t <NAME>...] [OPTIONS] <PACKAGE>
  godeep -t <NAME> -s <SELECTORS> [OPTIONS] <PACKAGE>",
        )
        .after_help(
            r#"EXAMPLES:
  godeep -t Cart ./shop                          # print Cart.DeepCopy to stdout
  godeep -t Cart -o cart_copy.go ./shop          # write to a file
  godeep -t Cart -s 'Items[i].Tags' ./shop       # keep Cart.Items[i].Tags shallow
  godeep -t Cart -t Item --pointer-receiver env.json
  cat env.json | godeep -t Cart -"#,
        )
        .arg(package_arg())
        .arg(type_arg())
        .arg(skip_arg())
        .arg(pointer_receiver_arg())
        .arg(output_arg())
        .arg(method_name_arg())
        .arg(formatter_arg())
        .arg(verbose_arg())
}
