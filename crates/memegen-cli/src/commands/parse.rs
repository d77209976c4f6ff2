use anyhow::Result;
use memegen_core::Ingestor;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<()> {
    let quotes = Ingestor::new().parse(&input_file)?;

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&quotes)?),
        _ => {
            for quote in &quotes {
                println!("{quote}");
            }
            eprintln!(
                "{} quote(s) parsed from {}",
                quotes.len(),
                input_file.display()
            );
        }
    }

    Ok(())
}
