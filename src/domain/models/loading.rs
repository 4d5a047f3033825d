#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Stands in for the prompt while a remote call is in flight. The dots grow
/// with every UI tick.
pub struct Loading<'a> {
    model: &'a str,
    ticks: usize,
}

impl<'a> Loading<'a> {
    pub fn new(model: &'a str, ticks: usize) -> Loading<'a> {
        return Loading { model, ticks };
    }

    pub fn text(&self) -> String {
        return format!("Waiting for {}{}", self.model, ".".repeat(self.ticks % 3 + 1));
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(
            Paragraph::new(self.text())
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .title("Send a message")
                        .padding(Padding::new(1, 1, 0, 0)),
                ),
            rect,
        );
    }
}
