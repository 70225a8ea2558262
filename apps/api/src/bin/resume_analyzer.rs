//! Resume analyzer CLI: extracts the text of a PDF résumé, asks the
//! completion service for a five-section analysis, prints it, and writes
//! it to `<input-stem>_analysis.txt` in the working directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use musebox::config::Config;
use musebox::errors::AppError;
use musebox::llm_client::CompletionClient;
use musebox::resume::{analysis_output_path, analyze_resume};

#[derive(Parser)]
#[command(name = "resume-analyzer", about = "Analyze a PDF resume with AI")]
struct Args {
    /// Path to the resume PDF
    pdf_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Missing argument mirrors the usage message without an error code.
    let Some(pdf_path) = args.pdf_path else {
        println!("Usage: resume-analyzer path/to/resume.pdf");
        return ExitCode::SUCCESS;
    };

    if !pdf_path.exists() {
        println!("Error: File {} not found.", pdf_path.display());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    musebox::init_tracing(&config.rust_log);

    let llm = CompletionClient::new(config.openai_api_key.clone());

    println!("Analyzing resume: {}", pdf_path.display());

    let analysis = match analyze_resume(&llm, &pdf_path).await {
        Ok(analysis) => analysis,
        // Unextractable PDFs are reported, not escalated; no completion
        // call has been made at this point.
        Err(AppError::Extraction(e)) => {
            println!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("\n--- Resume Analysis ---\n");
    println!("{analysis}");

    let output_path = analysis_output_path(&pdf_path);
    if let Err(e) = std::fs::write(&output_path, &analysis) {
        eprintln!("Error: failed to write {}: {e}", output_path.display());
        return ExitCode::FAILURE;
    }

    println!("\nAnalysis saved to {}", output_path.display());
    ExitCode::SUCCESS
}
