//! Parse a document from a file and print the resulting value tree.

use std::env;
use std::fs;
use std::process;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: dump <file.jsonc>");
            process::exit(2);
        }
    };

    let content = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(1);
    });

    match jsonc::parse(&content) {
        Ok(value) => println!("{:?}", value),
        Err(e) => {
            eprintln!("{}: {}", path, e);
            process::exit(1);
        }
    }
}
