use std::process::ExitCode;

use commitpilot::cli;
use commitpilot::engine::SessionOutcome;
use commitpilot::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(SessionOutcome::EnvironmentMissing) => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::SUCCESS
        }
    }
}
