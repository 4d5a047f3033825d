#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::temperature_index;
use crate::domain::models::temperature_labels;
use crate::domain::models::Focus;
use crate::domain::models::Parameters;
use crate::domain::models::TemperaturePreset;
use crate::domain::models::TEMPERATURES;

const MODEL_HELP: &str =
    "The model parameter controls the engine used to generate the response. Davinci produces best results.";
const TEMPERATURE_HELP: &str = "The temperature parameter controls the randomness of the model. 0 is the most logical, 1 is the most creative.";

/// Model and temperature pickers. The cursors only move the highlight, the
/// parameters change once an entry is selected.
#[derive(Default)]
pub struct Sidebar {
    models: Vec<String>,
    model_state: ListState,
    temperature_state: ListState,
}

fn move_cursor(state: &mut ListState, len: usize, up: bool) {
    if len == 0 {
        state.select(None);
        return;
    }

    let current = state.selected().unwrap_or(0);
    let next = if up {
        current.saturating_sub(1)
    } else {
        (current + 1).min(len - 1)
    };
    state.select(Some(next));
}

impl Sidebar {
    pub fn new(parameters: &Parameters) -> Sidebar {
        let mut sidebar = Sidebar::default();
        sidebar.sync_temperature(parameters.temperature);
        return sidebar;
    }

    pub fn models(&self) -> &[String] {
        return &self.models;
    }

    pub fn set_models(&mut self, models: Vec<String>, current_model: &str) {
        self.models = models;
        if self.models.is_empty() {
            self.model_state.select(None);
            return;
        }

        let idx = self
            .models
            .iter()
            .position(|model| return model == current_model)
            .unwrap_or(0);
        self.model_state.select(Some(idx));
    }

    pub fn sync_temperature(&mut self, temperature: f64) {
        self.temperature_state
            .select(Some(temperature_index(temperature).unwrap_or(0)));
    }

    pub fn up(&mut self, focus: Focus) {
        match focus {
            Focus::Models => move_cursor(&mut self.model_state, self.models.len(), true),
            Focus::Temperature => move_cursor(&mut self.temperature_state, TEMPERATURES.len(), true),
            Focus::Input => (),
        }
    }

    pub fn down(&mut self, focus: Focus) {
        match focus {
            Focus::Models => move_cursor(&mut self.model_state, self.models.len(), false),
            Focus::Temperature => {
                move_cursor(&mut self.temperature_state, TEMPERATURES.len(), false)
            }
            Focus::Input => (),
        }
    }

    pub fn highlighted_model(&self) -> Option<String> {
        return self
            .model_state
            .selected()
            .and_then(|idx| return self.models.get(idx))
            .cloned();
    }

    pub fn highlighted_temperature(&self) -> Option<f64> {
        return self
            .temperature_state
            .selected()
            .and_then(|idx| return TEMPERATURES.get(idx))
            .copied();
    }

    fn block(&self, title: &str, focused: bool) -> Block<'static> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string());
        if focused {
            block = block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Yellow));
        }

        return block;
    }

    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame<B>,
        rect: Rect,
        parameters: &Parameters,
        focus: Focus,
        notice: &Option<String>,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(TEMPERATURES.len() as u16 + 2),
                Constraint::Length(TemperaturePreset::ALL.len() as u16 + 2),
                Constraint::Length(6),
            ])
            .split(rect);

        frame.render_widget(
            Paragraph::new("+ New Chat (CTRL+N)").block(self.block("", false)),
            layout[0],
        );

        let active_style = Style::default().add_modifier(Modifier::BOLD);
        let highlight_style = Style::default().add_modifier(Modifier::REVERSED);

        let model_items = self
            .models()
            .iter()
            .map(|model| {
                if model == &parameters.model {
                    return ListItem::new(format!("● {model}")).style(active_style);
                }
                return ListItem::new(format!("  {model}"));
            })
            .collect::<Vec<ListItem>>();
        let mut model_state = self.model_state.clone();
        frame.render_stateful_widget(
            List::new(model_items)
                .block(self.block("Models", focus == Focus::Models))
                .highlight_style(highlight_style),
            layout[1],
            &mut model_state,
        );

        let temperature_items = temperature_labels()
            .into_iter()
            .zip(TEMPERATURES.iter())
            .map(|(label, value)| {
                if temperature_index(*value) == temperature_index(parameters.temperature) {
                    return ListItem::new(format!("● {label}")).style(active_style);
                }
                return ListItem::new(format!("  {label}"));
            })
            .collect::<Vec<ListItem>>();
        let mut temperature_state = self.temperature_state.clone();
        frame.render_stateful_widget(
            List::new(temperature_items)
                .block(self.block("Temperature", focus == Focus::Temperature))
                .highlight_style(highlight_style),
            layout[2],
            &mut temperature_state,
        );

        let presets = TemperaturePreset::ALL
            .iter()
            .enumerate()
            .map(|(idx, preset)| {
                return Line::from(format!("F{} {}", idx + 1, preset.label()));
            })
            .collect::<Vec<Line>>();
        frame.render_widget(
            Paragraph::new(presets).block(self.block("Presets", false)),
            layout[3],
        );

        let help = match (notice, focus) {
            (Some(text), _) => text.as_str(),
            (None, Focus::Temperature) => TEMPERATURE_HELP,
            (None, _) => MODEL_HELP,
        };
        let mut help_style = Style::default().fg(Color::DarkGray);
        if notice.is_some() {
            help_style = Style::default().fg(Color::Red);
        }
        frame.render_widget(
            Paragraph::new(help.to_string())
                .style(help_style)
                .wrap(Wrap { trim: true }),
            layout[4],
        );
    }
}
