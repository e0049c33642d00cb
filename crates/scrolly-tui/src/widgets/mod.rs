mod caption;
mod frame_panel;
mod panels;
mod rail;
mod status_bar;

pub use caption::CaptionWidget;
pub use frame_panel::FramePanelWidget;
pub use panels::{ComparePanelWidget, ContactPanelWidget};
pub use rail::RailWidget;
pub use status_bar::StatusBarWidget;

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `width` terminal cells
pub(crate) fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_cells() {
        assert_eq!(truncate("HYBRID", 3), "HYB");
        assert_eq!(truncate("ŘEZ", 2), "ŘE");
        assert_eq!(truncate("日本", 3), "日");
        assert_eq!(truncate("ok", 10), "ok");
    }
}
