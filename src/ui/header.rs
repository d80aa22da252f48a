use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARN};
use chrono::{DateTime, FixedOffset};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: location, loading marker and freshness.
pub struct Header<'a> {
    pub state_name: Option<&'a str>,
    pub district_label: Option<String>,
    pub loading: bool,
    pub last_updated: Option<DateTime<FixedOffset>>,
}

impl<'a> Header<'a> {
    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "slotwatch",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                self.state_name.unwrap_or("No state").to_string(),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                self.district_label
                    .clone()
                    .unwrap_or_else(|| "No district".to_string()),
                text_style,
            ),
        ];

        if let Some(updated) = self.last_updated {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Updated {} IST", updated.format("%H:%M:%S")),
                text_style,
            ));
        }

        if self.loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Updating...", Style::default().fg(STATUS_WARN)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
