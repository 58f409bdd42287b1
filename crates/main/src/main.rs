use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use sample_pdf_fixture::DEFAULT_OUTPUT_PATH;
use tracing_subscriber::EnvFilter;

/// Writes `data/sample_merchant_summary.pdf` under the repository root.
///
/// The styled layout is used when the crate is built with the `styled`
/// feature and the Roboto fonts can be found (see `PDF_FIXTURE_FONTS_DIR`).
/// Otherwise a minimal single-page PDF is written instead.
#[derive(Parser)]
#[command(author, version, about = "Generate the sample merchant summary PDF fixture")]
struct Cli {}

fn repository_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    Cli::parse();
    init_logging();

    let path = repository_root().join(DEFAULT_OUTPUT_PATH);
    match sample_pdf_fixture::generate(&path) {
        Ok(generated) => println!(
            "Wrote {} ({})",
            generated.path.display(),
            generated.backend
        ),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
