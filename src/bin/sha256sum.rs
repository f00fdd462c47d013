//! Prints the SHA-256 of each input, `sha256sum` style.
//!
//! Usage: sha256sum [--trace] [FILE]...
//!
//! With no FILE, or when FILE is `-`, standard input is read. Every input is
//! read to the end before it is hashed.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use sha256_core::crypto::hash::sha256::{digest_observed, NoopObserver, TraceWriter};
use sha256_core::to_hex;

fn read_input(name: &str) -> io::Result<Vec<u8>> {
    if name == "-" {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        Ok(data)
    } else {
        std::fs::read(name)
    }
}

fn hash(data: &[u8], trace: bool) -> Result<[u8; 32], String> {
    if trace {
        let mut observer = TraceWriter::new(io::stderr().lock());
        let digest = digest_observed(data, &mut observer).map_err(|err| err.to_string())?;
        observer.finish().map_err(|err| format!("trace: {}", err))?;
        Ok(digest)
    } else {
        digest_observed(data, &mut NoopObserver).map_err(|err| err.to_string())
    }
}

fn main() -> ExitCode {
    let mut trace = false;
    let mut names = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            "-h" | "--help" => {
                println!("usage: sha256sum [--trace] [FILE]...");
                return ExitCode::SUCCESS;
            }
            _ => names.push(arg),
        }
    }
    if names.is_empty() {
        names.push("-".to_string());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = ExitCode::SUCCESS;
    for name in &names {
        let result = read_input(name)
            .map_err(|err| err.to_string())
            .and_then(|data| hash(&data, trace));
        match result {
            Ok(digest) => {
                if writeln!(out, "{}  {}", to_hex(&digest), name).is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                eprintln!("sha256sum: {}: {}", name, err);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
