#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Role;

const ASSISTANT_COLOUR: Color = Color::Rgb(13, 163, 127);

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    message: &'a Message,
    title: &'a str,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, title: &'a str, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            message,
            title,
            window_max_width,
        };
    }

    fn alignment(&self) -> BubbleAlignment {
        if self.message.role == Role::User {
            return BubbleAlignment::Right;
        }
        return BubbleAlignment::Left;
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32 * 0.04).ceil()) as usize;

        // left border + left padding + (text, not counted) + right padding + right
        // border + scrollbar. And then minimum bubble padding.
        let line_border_width = 5 + min_bubble_padding_length;

        let message_lines = self
            .message
            .as_string_lines(self.window_max_width.saturating_sub(line_border_width).max(1));

        let title_len = self.title.chars().count();
        let max_line_length = message_lines
            .iter()
            .map(|line| {
                return line.chars().count();
            })
            .max()
            .unwrap_or(0)
            .max(title_len);

        let mut lines: Vec<Line> = vec![];
        for line in message_lines {
            let fill = " ".repeat(max_line_length - line.chars().count());
            let bubble_padding = " ".repeat(
                self.window_max_width
                    .saturating_sub(max_line_length + 4),
            );

            let spans = vec![
                self.highlight_span("│ ".to_string()),
                Span::from(line),
                self.highlight_span(format!("{fill} │")),
            ];
            lines.push(self.pad_line(spans, bubble_padding));
        }

        // Add 2 for the spaces next to the vertical bars.
        let inner_bar_length = max_line_length + 2;
        let top_bar = format!(
            "╭{}{}╮",
            self.title,
            "─".repeat(inner_bar_length - title_len)
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(inner_bar_length));
        let bar_bubble_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(inner_bar_length + 2),
        );

        let mut res = vec![self.pad_line(
            vec![self.highlight_span(top_bar)],
            bar_bubble_padding.to_string(),
        )];
        res.extend(lines);
        res.push(self.pad_line(vec![self.highlight_span(bottom_bar)], bar_bubble_padding));

        return res;
    }

    fn pad_line(&self, mut spans: Vec<Span<'static>>, padding: String) -> Line<'static> {
        if self.alignment() == BubbleAlignment::Left {
            spans.push(Span::from(padding));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(padding)];
        res.extend(spans);
        return Line::from(res);
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.role == Role::Assistant {
            return Span::styled(
                text,
                Style {
                    fg: Some(ASSISTANT_COLOUR),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}
