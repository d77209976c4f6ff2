use anyhow::{bail, Context, Result};
use memegen_core::{load_quote_pool, MemeEngine, Quote};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

pub fn run(
    image: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    body: Option<String>,
    author: Option<String>,
    quote_files: Vec<PathBuf>,
    out_dir: PathBuf,
    width: u32,
) -> Result<()> {
    let mut rng = rand::thread_rng();

    let img = match image {
        Some(path) => path,
        None => {
            let dir = images_dir.context("either --image or --images-dir is required")?;
            random_image(&dir, &mut rng)?
        }
    };

    let quote = pick_quote(body, author, &quote_files, &mut rng)?;

    let engine = MemeEngine::new(&out_dir)?;
    let out = engine.make_meme(&img, quote.body(), quote.author(), width)?;
    println!("{}", out.display());

    Ok(())
}

/// Use the supplied body/author pair, or draw a random quote from the
/// pool loaded out of the given files.
fn pick_quote(
    body: Option<String>,
    author: Option<String>,
    quote_files: &[PathBuf],
    rng: &mut impl Rng,
) -> Result<Quote> {
    match (body, author) {
        (Some(body), Some(author)) => {
            Quote::new(&body, &author).context("quote body and author must be non-empty")
        }
        (Some(_), None) => bail!("--author is required when --body is provided"),
        (None, Some(_)) => bail!("--body is required when --author is provided"),
        (None, None) => {
            if quote_files.is_empty() {
                bail!("no quote source: pass --body and --author, or --quotes <FILE>");
            }
            let pool = load_quote_pool(quote_files);
            pool.choose(rng)
                .cloned()
                .context("no quotes could be loaded from any file")
        }
    }
}

/// Pick a random jpg/jpeg/png from a directory.
fn random_image(dir: &Path, rng: &mut impl Rng) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read images directory {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| matches!(e.to_lowercase().as_str(), "jpg" | "jpeg" | "png"))
            .unwrap_or(false);
        if is_image {
            images.push(path);
        }
    }

    images
        .choose(rng)
        .cloned()
        .with_context(|| format!("no images found in {}", dir.display()))
}
