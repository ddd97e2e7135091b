use std::process::ExitCode;

use clap::Parser;

use doorline_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    doorline_observability::init_with(cli.log_format.into());

    let stdout = std::io::stdout();
    match doorline_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "doorline-quote failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
