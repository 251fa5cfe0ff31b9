use std::process::ExitCode;

use smssend::cli;
use smssend::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse_or_exit();
    telemetry::init(cli.debug);

    match cli::run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_usage() {
                eprintln!("smssend: {err}");
            } else {
                tracing::debug!(error = %err, "send failed");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
