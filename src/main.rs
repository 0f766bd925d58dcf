use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = listfeat::cli::run(env::args()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
