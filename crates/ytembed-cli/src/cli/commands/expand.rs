//! `ytembed expand [path]` – expand shortcodes in a page source.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use ytembed_core::embed::EmbedOptions;
use ytembed_core::shortcode;

pub fn run_expand(path: Option<&Path>, in_place: bool, options: &EmbedOptions) -> Result<()> {
    match path {
        Some(path) => {
            let expanded = shortcode::expand_file(path, options)?;
            if in_place {
                std::fs::write(path, &expanded)
                    .with_context(|| format!("write expanded page: {}", path.display()))?;
                println!("Expanded shortcodes in {}", path.display());
            } else {
                print!("{expanded}");
            }
        }
        None => {
            if in_place {
                bail!("--in-place requires a file path");
            }
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read page source from stdin")?;
            let expanded = shortcode::expand_document(&text, options)?;
            print!("{expanded}");
        }
    }
    Ok(())
}
