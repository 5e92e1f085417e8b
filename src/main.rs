use anyhow::{Context, Result};
use chunkpress::{
    DefaultSeparator, Document, FixedSeparator, RenderContext, SeparatorResolver, TransformRegistry,
};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Split a content document into template-addressable chunks
#[derive(Parser)]
#[command(name = "chunkpress", version)]
struct Args {
    /// Document to split
    path: PathBuf,

    /// Separator marker to split at (defaults to the "more" marker)
    #[arg(short, long)]
    separator: Option<String>,

    /// Treat the input as a JSON document payload ({"id": ..., "content": ...})
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut document = if args.json {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid document payload in {}", args.path.display()))?
    } else {
        Document::new(raw)
    };

    let resolver: Box<dyn SeparatorResolver> = match args.separator {
        Some(sep) => Box::new(FixedSeparator(sep)),
        None => Box::new(DefaultSeparator),
    };
    document.attach_chunks(resolver.as_ref())?;

    let chunk_count = document
        .chunk_state()
        .map(|state| state.len())
        .unwrap_or(0);
    println!("=== {} ({} chunks) ===\n", document.id, chunk_count);

    let transforms = TransformRegistry::new();
    let mut ctx = RenderContext::new(&mut document, &transforms);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut number = 1;
    while ctx.has_more() {
        writeln!(out, "--- chunk {} ---", number)?;
        ctx.emit(&mut out, None)?;
        writeln!(out, "\n")?;
        number += 1;
    }

    Ok(())
}
