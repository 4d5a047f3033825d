#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

use super::TemperaturePreset;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args.remove(0);
        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_new_chat()
            || cmd.is_model_set()
            || cmd.is_temperature_set()
            || cmd.preset().is_some()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_new_chat(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_model_set(&self) -> bool {
        return ["/m", "/model"].contains(&self.command.as_str());
    }

    pub fn is_temperature_set(&self) -> bool {
        return ["/t", "/temperature"].contains(&self.command.as_str());
    }

    pub fn preset(&self) -> Option<TemperaturePreset> {
        match self.command.as_str() {
            "/logical" => return Some(TemperaturePreset::Logical),
            "/balanced" => return Some(TemperaturePreset::Balanced),
            "/creative" => return Some(TemperaturePreset::Creative),
            _ => return None,
        }
    }
}
