use anyhow::Result;
use serde::Serialize;

use scrolly_core::{AppConfig, CatalogOptions, Storyboard};

#[derive(Serialize)]
struct FrameRow<'a> {
    index: usize,
    sequence: &'a str,
    image: Option<&'a str>,
    hold: u32,
}

pub fn run(config: &AppConfig, storyboard: &Storyboard, json: bool) -> Result<()> {
    let catalog = storyboard.validate(&CatalogOptions::from(&config.engine))?;

    let rows: Vec<FrameRow> = catalog
        .frames()
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameRow {
            index,
            sequence: &frame.segment_key,
            image: frame.image_ref.as_deref(),
            hold: catalog.hold(index),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{:>4}  {:<16} hold {}  {}",
            row.index,
            row.sequence,
            row.hold,
            row.image.unwrap_or("(blank)")
        );
    }

    Ok(())
}
