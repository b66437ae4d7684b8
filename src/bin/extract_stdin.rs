//! Simple CLI that reads forum HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [listing|detail|stats] [url]`

use std::io::{self, Read};

use forum_extract::{extract_detail, extract_listing, extract_stats};

const LISTING_LIMIT: usize = 20;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map_or("detail", String::as_str);

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match mode {
        "listing" => match extract_listing(&html, LISTING_LIMIT) {
            Ok(posts) => serde_json::to_string(&posts).unwrap_or_default(),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        "stats" => match extract_stats(&html) {
            Ok(stats) => serde_json::to_string(&stats).unwrap_or_default(),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        _ => {
            let url = args.get(2).cloned().unwrap_or_default();
            match extract_detail(&html, &url) {
                Ok(detail) => serde_json::to_string(&detail).unwrap_or_default(),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
    };

    println!("{output}");
}
