use std::process::ExitCode;
use workflow_processor::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Any error that escapes the pipeline maps to exit code 1.
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
