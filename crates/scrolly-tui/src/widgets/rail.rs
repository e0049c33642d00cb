use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scrolly_core::{CopySegment, SegmentId};

use super::truncate;
use crate::app::App;

pub struct RailWidget;

impl RailWidget {
    /// Draw the progress rail; returns the clickable cell of each segment
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Vec<(SegmentId, Rect)> {
        let theme = &app.theme;
        let view = app.view();
        let cells = layout(app.engine.segments(), area);

        for &(id, rect) in &cells {
            let active = view.active_segments.contains(&id);
            let segment = &app.engine.segments()[id];

            let style = if active {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.rail_active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.grey2).bg(theme.rail_idle)
            };

            let width = usize::from(rect.width);
            let text = truncate(&format!(" {} {}", id + 1, segment.label), width);
            let padded = format!("{text:<width$}");
            frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, style))), rect);
        }

        cells
    }
}

/// Split `area` into one cell per segment, sized by frame span
pub fn layout(segments: &[CopySegment], area: Rect) -> Vec<(SegmentId, Rect)> {
    if segments.is_empty() || area.width == 0 {
        return Vec::new();
    }

    let spans: Vec<u32> = segments
        .iter()
        .map(|s| (s.end_frame.saturating_sub(s.start_frame) + 1) as u32)
        .collect();
    let total: u32 = spans.iter().sum();

    let mut cells = Vec::with_capacity(segments.len());
    let mut x = area.x;
    let right = area.x + area.width;
    for (id, span) in spans.iter().enumerate() {
        if x >= right {
            break;
        }
        let width = if id + 1 == segments.len() {
            right - x
        } else {
            let share = (u32::from(area.width) * span / total.max(1)) as u16;
            share.max(1).min(right - x)
        };
        cells.push((id, Rect::new(x, area.y, width, area.height)));
        x += width;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_weights_by_span() {
        let segments = vec![
            CopySegment::new(0, 9, "A", "", ""),
            CopySegment::new(10, 14, "B", "", ""),
            CopySegment::new(15, 19, "C", "", ""),
        ];
        let cells = layout(&segments, Rect::new(0, 5, 40, 1));
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].1, Rect::new(0, 5, 20, 1));
        assert_eq!(cells[1].1, Rect::new(20, 5, 10, 1));
        assert_eq!(cells[2].1, Rect::new(30, 5, 10, 1));
    }

    #[test]
    fn test_layout_narrow_area() {
        let segments = vec![
            CopySegment::new(0, 0, "A", "", ""),
            CopySegment::new(1, 100, "B", "", ""),
        ];
        let cells = layout(&segments, Rect::new(0, 0, 4, 1));
        assert_eq!(cells[0].1.width, 1);
        assert_eq!(cells[1].1.width, 3);
        assert!(layout(&segments, Rect::new(0, 0, 0, 1)).is_empty());
    }
}
