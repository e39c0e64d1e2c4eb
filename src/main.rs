use std::process::ExitCode;

fn main() -> ExitCode {
    match circq::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(circq::errors::get_exit_code(&e))
        }
    }
}
