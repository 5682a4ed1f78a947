use clap::Parser;

use spec_guard::cli::{Cli, Commands};
use spec_guard::commands::{run_check, run_init};
use spec_guard::logging::{self, Verbosity};

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
