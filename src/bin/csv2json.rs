//! Convert a CSV file into newline-delimited JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the source CSV file.
    input: PathBuf,
    /// Destination file. Defaults to the input path with a `.txt` extension.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("txt"));

    let mut reader = csv::Reader::from_path(&args.input)?;
    let headers = reader.headers()?.clone();
    let mut writer = BufWriter::new(File::create(&output)?);

    // One JSON object per CSV row, keyed by header.
    for record in reader.records() {
        let record = record?;
        let row: serde_json::Map<String, serde_json::Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_owned(), value.into()))
            .collect();

        serde_json::to_writer(&mut writer, &serde_json::Value::Object(row))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    println!("Completed.");
    Ok(())
}
