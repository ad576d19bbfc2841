use clap::Parser;
use colored::Colorize;
use follownet_core::cli::{self, Cli};
use follownet_core::exit::FollownetExit;

fn main() -> FollownetExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, &cli.file)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(FollownetExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            FollownetExit::Error
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
