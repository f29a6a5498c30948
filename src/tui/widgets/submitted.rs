//! Submitted values panel — one line per display region of the last valid submit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::SubmittedRecord;

/// Rows needed to draw `record`, borders included.
pub fn submitted_height(record: &SubmittedRecord) -> u16 {
    u16::try_from(record.display_regions().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Renders the regions of `record` inside a titled box.
///
/// The message line is omitted when the submitted message was empty.
#[mutants::skip]
pub fn draw_submitted(record: &SubmittedRecord, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" You Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let label_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = record
        .display_regions()
        .into_iter()
        .map(|(region, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", region.label()), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
