use clap::Parser;
use skupair::app::{handle_fatal_error, init_logging, AppConfig};
use skupair::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&config);

    if let Err(e) = cli::execute(&cli, &config) {
        handle_fatal_error(e, cli.verbose);
    }
}
