//! Photosphere gallery layout from the command line.
//!
//! Reads a JSON array of photos (`id`, `width`, `height`, optional `group`),
//! lays them out as justified rows and prints the rows with each photo's
//! display rectangle as JSON.

mod args;
mod output;

use anyhow::{Context, Result};
use photosphere_layout::compute_layout;
use photosphere_types::LayoutConfig;

use args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1), std::env::var("PHOTOSPHERE_CONFIG").ok())?;

    let config = match &args.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("loading layout config {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    log::info!(
        "Gallery {}px wide, target row height {}px",
        config.gallery_width,
        config.target_row_height,
    );

    let photos = output::load_photos(&args.photos)?;
    let rows = compute_layout(&photos, &config).context("computing gallery layout")?;
    log::info!("Laid out {} photos in {} rows", photos.len(), rows.len());

    let rendered = output::render(&rows, 0.0);
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
