use std::{io, process};

use base32c::{run, Cli};
use clap::Parser;

fn main() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // usage errors exit with 1, help and version with 0
        Err(error) if error.use_stderr() => {
            let _ = error.print();
            process::exit(1)
        }
        Err(error) => error.exit(),
    };

    if let Err(error) = run(&cli, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{}", error);
        process::exit(1)
    }
}
