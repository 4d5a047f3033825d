use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        return TextArea::with_text("");
    }

    pub fn with_text(text: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(vec![text.to_string()]);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Send a message")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }
}
