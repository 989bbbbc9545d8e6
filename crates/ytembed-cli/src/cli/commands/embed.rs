//! `ytembed embed <url>` – print the iframe fragment for one URL.

use anyhow::Result;
use ytembed_core::embed::{embed_snippet_with, EmbedOptions};

pub fn run_embed(url: &str, options: &EmbedOptions) -> Result<()> {
    let snippet = embed_snippet_with(url, options)?;
    println!("{snippet}");
    Ok(())
}
