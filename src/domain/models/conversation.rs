#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use super::Message;
use super::Role;

pub const SEED_TEXT: &str = "Initializing...";

/// The ordered chat log. It always holds at least one message, starting with
/// an assistant seed that is replaced once the first remote call completes.
#[derive(Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation::initialize();
    }
}

impl Conversation {
    pub fn initialize() -> Conversation {
        return Conversation {
            messages: vec![Message::assistant(SEED_TEXT)],
        };
    }

    pub fn append_user(&mut self, text: &str) {
        self.messages.push(Message::user(text));
    }

    pub fn append_assistant(&mut self, text: &str) {
        self.messages.push(Message::assistant(text));
    }

    /// Discards every message and keeps a single assistant message.
    pub fn replace(&mut self, text: &str) {
        self.messages = vec![Message::assistant(text)];
    }

    pub fn reset(&mut self) {
        self.replace(&greeting_template());
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn last(&self) -> &Message {
        // Never empty, see `initialize`.
        return &self.messages[self.messages.len() - 1];
    }
}

pub fn intro_template() -> String {
    let assistant = Role::Assistant;
    return format!("The following is a conversation with an AI {assistant}. The {assistant} is helpful, creative, clever, and very friendly.\n\n");
}

pub fn greeting_template() -> String {
    let user = Role::User;
    let assistant = Role::Assistant;
    return format!(
        "{}{user}: Hello, who are you?\n{assistant}: I am an AI created by OpenAI. How can I help you today?\n{user}: ",
        intro_template()
    );
}

pub fn bootstrap_prompt() -> String {
    return format!("{}{}: Hello.\n", intro_template(), Role::User);
}
