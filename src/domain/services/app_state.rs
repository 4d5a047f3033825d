#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use super::Sidebar;
use crate::domain::models::parse_temperature;
use crate::domain::models::Action;
use crate::domain::models::Conversation;
use crate::domain::models::Event;
use crate::domain::models::Focus;
use crate::domain::models::Parameters;
use crate::domain::models::Prompt;
use crate::domain::models::SlashCommand;
use crate::domain::models::TemperaturePreset;
use crate::domain::models::TextArea;

/// Line count for the scrollbar, saturating instead of wrapping for very long
/// conversations.
fn scroll_length(lines: usize) -> u16 {
    return u16::try_from(lines).unwrap_or(u16::MAX);
}

/// Everything the UI renders. The UI loop is the only writer, remote results
/// reach it as events in the order the action worker produced them.
pub struct AppState<'a> {
    pub bubble_list: BubbleList,
    pub conversation: Conversation,
    pub focus: Focus,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub notice: Option<String>,
    pub parameters: Parameters,
    pub scroll: Scroll,
    pub sidebar: Sidebar,
    pub textarea: tui_textarea::TextArea<'a>,
    pub ticks: usize,
    pub waiting_for_backend: bool,
}

impl<'a> AppState<'a> {
    pub fn new(parameters: Parameters, username: &str) -> AppState<'a> {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(username),
            conversation: Conversation::initialize(),
            focus: Focus::default(),
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            sidebar: Sidebar::new(&parameters),
            parameters,
            scroll: Scroll::default(),
            textarea: TextArea::default(),
            ticks: 0,
            waiting_for_backend: false,
        };
        app_state.sync_dependants();

        return app_state;
    }

    /// Requests the model list and the bootstrap greeting. The prompt stays
    /// locked until the greeting has replaced the seed message.
    pub fn start(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        tx.send(Action::ListModels())?;
        tx.send(Action::Bootstrap(self.parameters.model.to_string()))?;
        self.waiting_for_backend = true;

        return Ok(());
    }

    pub fn input_text(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    /// Returns true when the app should exit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::BootstrapResponse(text) => {
                self.conversation.replace(&text);
                self.waiting_for_backend = false;
                self.sync_dependants();
            }
            Event::BootstrapFailed() => {
                self.waiting_for_backend = false;
            }
            Event::CompletionResponse(text) => {
                self.conversation.append_assistant(&text);
                tracing::debug!(messages = self.conversation.len(), "Appended reply");
                self.textarea = TextArea::default();
                self.waiting_for_backend = false;
                self.sync_dependants();
                self.scroll.last();
            }
            Event::CompletionFailed() => {
                self.waiting_for_backend = false;
            }
            Event::ModelListResponse(models) => {
                self.sidebar.set_models(models, &self.parameters.model);
            }
            Event::ModelListFailed() => {
                self.sidebar.set_models(vec![], &self.parameters.model);
            }
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::KeyboardCTRLN() => {
                self.new_chat();
            }
            Event::KeyboardPreset(preset) => {
                self.apply_preset(preset);
            }
            Event::KeyboardTab() => {
                self.focus = self.focus.next();
            }
            Event::KeyboardUp() => {
                if self.focus == Focus::Input {
                    self.scroll.up();
                } else {
                    self.sidebar.up(self.focus);
                }
            }
            Event::KeyboardDown() => {
                if self.focus == Focus::Input {
                    self.scroll.down();
                } else {
                    self.sidebar.down(self.focus);
                }
            }
            Event::KeyboardEnter() => match self.focus {
                Focus::Input => {
                    if !self.waiting_for_backend {
                        return self.submit(tx);
                    }
                }
                Focus::Models => {
                    if let Some(model) = self.sidebar.highlighted_model() {
                        self.select_model(&model);
                    }
                }
                Focus::Temperature => {
                    if let Some(temperature) = self.sidebar.highlighted_temperature() {
                        self.select_temperature(temperature)?;
                    }
                }
            },
            Event::KeyboardCharInput(input) => {
                if self.accepts_input() {
                    self.textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if self.accepts_input() {
                    for char in text.replace(['\r', '\n'], " ").chars() {
                        self.textarea.insert_char(char);
                    }
                }
            }
            Event::UIScrollDown() => {
                self.scroll.down();
            }
            Event::UIScrollUp() => {
                self.scroll.up();
            }
            Event::UIScrollPageDown() => {
                self.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                self.scroll.up_page();
            }
            Event::UITick() => {
                self.ticks = self.ticks.wrapping_add(1);
            }
        }

        return Ok(false);
    }

    fn accepts_input(&self) -> bool {
        return self.focus == Focus::Input && !self.waiting_for_backend;
    }

    fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let text = self.input_text();
        if let Some(command) = SlashCommand::parse(&text) {
            return Ok(self.handle_slash_command(command));
        }

        self.notice = None;
        self.conversation.append_user(&text);
        self.waiting_for_backend = true;
        self.sync_dependants();
        self.scroll.last();

        tx.send(Action::Submit(Prompt {
            text,
            model: self.parameters.model.to_string(),
            temperature: self.parameters.temperature,
        }))?;

        return Ok(false);
    }

    fn handle_slash_command(&mut self, command: SlashCommand) -> bool {
        if command.is_quit() {
            return true;
        }

        if command.is_new_chat() {
            self.new_chat();
        } else if command.is_model_set() {
            let Some(model) = command.args.first() else {
                self.notice = Some(
                    "You must specify a model name with `/model` or `/m`.".to_string(),
                );
                return false;
            };
            self.select_model(&model.to_string());
        } else if command.is_temperature_set() {
            let res = parse_temperature(&command.args.join(" "))
                .and_then(|value| return self.select_temperature(value));
            if let Err(err) = res {
                self.notice = Some(err.to_string());
                return false;
            }
        } else if let Some(preset) = command.preset() {
            self.apply_preset(preset);
        }

        self.notice = None;
        self.textarea = TextArea::default();
        return false;
    }

    pub fn new_chat(&mut self) {
        self.conversation.reset();
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn select_model(&mut self, id: &str) {
        self.parameters.select_model(id);
        tracing::debug!(model = id, "Selected model");
    }

    pub fn select_temperature(&mut self, value: f64) -> Result<()> {
        self.parameters.select_temperature(value)?;
        self.sidebar.sync_temperature(self.parameters.temperature);
        tracing::debug!(temperature = value, "Selected temperature");

        return Ok(());
    }

    pub fn apply_preset(&mut self, preset: TemperaturePreset) {
        self.parameters.apply_preset(preset);
        self.sidebar.sync_temperature(self.parameters.temperature);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(self.conversation.messages(), self.last_known_width as usize);

        self.scroll
            .set_state(scroll_length(self.bubble_list.len()), self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
