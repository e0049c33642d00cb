use anyhow::Result;

use scrolly_core::{AppConfig, CatalogOptions, DisplayMode, Storyboard};

pub fn run(config: &AppConfig, storyboard: &Storyboard) -> Result<()> {
    config.engine.validate()?;
    let catalog = storyboard.validate(&CatalogOptions::from(&config.engine))?;

    println!(
        "Storyboard OK: {} sequences, {} frames (max frame {}), {} segments\n",
        storyboard.sequences.len(),
        catalog.len(),
        catalog.max_frame(),
        storyboard.segments.len()
    );

    println!("Sequences:");
    let mut start = 0;
    for seq in &storyboard.sequences {
        let count = seq.frame_numbers().len();
        let hold = seq.hold.unwrap_or(config.engine.default_hold);
        println!(
            "  {:<16} frames {:>3}..={:<3} hold {}",
            seq.key,
            start,
            start + count - 1,
            hold
        );
        start += count;
    }

    println!("\nSegments:");
    for (id, segment) in storyboard.segments.iter().enumerate() {
        let mode = match segment.display_mode {
            DisplayMode::Normal => String::new(),
            DisplayMode::Compare => " [compare]".to_string(),
            DisplayMode::Contact => " [contact]".to_string(),
        };
        println!(
            "  {} {:<12} {:>3}..={:<3} anchor {:>3}{}",
            id + 1,
            segment.label,
            segment.start_frame,
            segment.end_frame,
            segment.anchor(),
            mode
        );
    }

    let uncovered = (0..=catalog.max_frame())
        .filter(|&frame| !storyboard.segments.iter().any(|s| s.contains(frame)))
        .count();
    if uncovered > 0 {
        println!("\n{uncovered} frame(s) have no caption");
    }

    Ok(())
}
