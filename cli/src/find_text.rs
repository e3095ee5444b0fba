mod logging;

use clap::Parser;
use pdf_text_search::{DEFAULT_TEXT_PATH, SearchTerms, Searcher};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "find-text")]
#[command(about = "Print the lines of an extracted text file that mention any search term", long_about = None)]
struct Args {
    /// Text file to search
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TEXT_PATH)]
    input: PathBuf,

    /// Term to search for, case-insensitively (repeatable; replaces the default terms)
    #[arg(short, long = "term", value_name = "TERM")]
    terms: Vec<String>,
}

fn main() {
    logging::init();
    let args = Args::parse();

    let terms = if args.terms.is_empty() {
        SearchTerms::default()
    } else {
        SearchTerms::new(args.terms)
    };
    debug!(input = ?args.input, terms = ?terms.as_slice(), "starting search");

    let searcher = Searcher::new(terms);
    let matches = match searcher.search_path(&args.input) {
        Ok(matches) => matches,
        Err(e) if e.is_missing_input() => {
            eprintln!("Error: text file not found at {}", args.input.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error searching text: {}", e);
            std::process::exit(1);
        }
    };

    for found in matches {
        match found {
            Ok(found) => println!("{}", found),
            Err(e) => {
                eprintln!("Error searching text: {}", e);
                std::process::exit(1);
            }
        }
    }
}
