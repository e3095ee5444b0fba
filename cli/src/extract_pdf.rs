mod logging;

use clap::Parser;
use pdf_text_search::{DEFAULT_PDF_PATH, DEFAULT_TEXT_PATH, PdfExtractor};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "extract-pdf")]
#[command(about = "Extract the text of a PDF page by page into a text file", long_about = None)]
struct Args {
    /// PDF file to extract text from
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_PDF_PATH)]
    input: PathBuf,

    /// Text file to write, replaced if it exists
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TEXT_PATH)]
    output: PathBuf,

    /// Password for encrypted PDFs
    #[arg(short, long)]
    password: Option<String>,
}

fn main() {
    logging::init();
    let args = Args::parse();
    debug!(input = ?args.input, output = ?args.output, "starting extraction");

    // Build extractor with optional password
    let extractor = if let Some(password) = args.password {
        PdfExtractor::builder().password(password).build()
    } else {
        PdfExtractor::default()
    };

    let pdf = match extractor.open(&args.input) {
        Ok(pdf) => pdf,
        Err(e) if e.is_missing_input() => {
            eprintln!("Error: PDF file not found at {}", args.input.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error extracting text: {}", e);
            std::process::exit(1);
        }
    };

    println!("Extracting text from {} pages...", pdf.page_count());

    if let Err(e) = pdf.extract().and_then(|text| text.write_to(&args.output)) {
        eprintln!("Error extracting text: {}", e);
        std::process::exit(1);
    }

    println!("Successfully extracted text to {}", args.output.display());
}
