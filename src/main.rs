// src/main.rs

use construplan::{ExitStatus, cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(ExitStatus::Success) => {}
        Ok(ExitStatus::IssuesFound) => std::process::exit(1),
        Err(err) => {
            eprintln!("construplan error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<ExitStatus> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
