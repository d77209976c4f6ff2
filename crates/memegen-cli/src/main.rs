mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "memegen",
    version,
    about = "Generate meme images from quote files and photos"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meme from an image and a quote
    Generate {
        /// Path to a source image
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Directory to pick a random image from when --image is omitted
        #[arg(long, value_name = "DIR")]
        images_dir: Option<PathBuf>,

        /// Quote body to add to the image
        #[arg(long)]
        body: Option<String>,

        /// Quote author (required when --body is provided)
        #[arg(long)]
        author: Option<String>,

        /// Quote file(s) to draw a random quote from when --body is omitted
        #[arg(long = "quotes", value_name = "FILE")]
        quotes: Vec<PathBuf>,

        /// Output directory for generated memes
        #[arg(long, value_name = "DIR", default_value = "./tmp")]
        out: PathBuf,

        /// Maximum output width in pixels
        #[arg(long, default_value_t = 500)]
        width: u32,
    },
    /// Parse a quote file into structured quotes (without generating)
    Parse {
        /// Path to a .txt, .csv, .docx or .pdf quote file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            image,
            images_dir,
            body,
            author,
            quotes,
            out,
            width,
        } => commands::generate::run(image, images_dir, body, author, quotes, out, width),
        Commands::Parse { input_file, output } => commands::parse::run(input_file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
