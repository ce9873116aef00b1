//! Prints the header and CSR content of a MatrixMarket file

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use matmarket::{read, read_csr, Callback, CollectingCallback};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: mtxinfo <file.mtx>");
            process::exit(1);
        }
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open {}: {}", path, e);
            process::exit(1);
        }
    };

    let mut callback = CollectingCallback::new();
    if let Err(e) = read(BufReader::new(file), &mut callback) {
        eprintln!("Failed to read {}: {}", path, e);
        process::exit(1);
    }

    let description = match callback.matrix_description() {
        Some(description) => *description,
        None => {
            eprintln!("No matrix found in {}", path);
            process::exit(1);
        }
    };
    println!("{}", description);
    println!("Stored entries: {}", callback.entries().len());

    // Re-read for the CSR view; the stream was consumed above
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to reopen {}: {}", path, e);
            process::exit(1);
        }
    };
    match read_csr(BufReader::new(file)) {
        Ok(csr) => {
            println!("\nCSR ({} nonzeros after expansion):", csr.nnz());
            println!("  Row pointers: {:?}", csr.row_pointers);
            println!("  Column indices: {:?}", csr.column_indices);
            println!("  Values: {:?}", csr.values);
        }
        Err(e) => {
            eprintln!("Failed to build CSR from {}: {}", path, e);
            process::exit(1);
        }
    }
}
