use clap::Parser;

use style_guard::cli::Cli;
use style_guard::commands::{run_check, run_extensions};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = if cli.extensions {
        run_extensions(cli.verbose)
    } else {
        run_check(&cli)
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` controls the filter; `--verbose` raises it to debug.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
