//! Batch poem CLI: reads a newline-delimited names file and writes one
//! poem file per name under `batch_poems/`. Strictly sequential; aborts
//! and reports on the first failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use musebox::config::Config;
use musebox::llm_client::CompletionClient;
use musebox::poems::process_names_file;

#[derive(Parser)]
#[command(name = "batch-poems", about = "Generate a poem file for every name in a list")]
struct Args {
    /// Newline-delimited names file
    #[arg(default_value = "names.txt")]
    names_file: PathBuf,

    /// Directory for the generated poem files
    #[arg(long, default_value = "batch_poems")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    musebox::init_tracing(&config.rust_log);

    let llm = CompletionClient::new(config.openai_api_key.clone());

    match process_names_file(&llm, &args.names_file, &args.out_dir).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
