use super::SlashCommand;
use crate::domain::models::TemperaturePreset;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_plain_text() {
    let text = "What is the meaning of /new?";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_new_chat() {
    let cmd = SlashCommand::parse("/n").unwrap();
    assert!(cmd.is_new_chat());
}
#[test]
fn it_is_new_chat() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(cmd.is_new_chat());
}

#[test]
fn it_is_short_model_set() {
    let cmd = SlashCommand::parse("/m gpt-3.5-turbo").unwrap();
    assert!(cmd.is_model_set());
    assert_eq!(cmd.args, vec!["gpt-3.5-turbo".to_string()]);
}
#[test]
fn it_is_model_set() {
    let cmd = SlashCommand::parse("/model  text-davinci-003 ").unwrap();
    assert!(cmd.is_model_set());
    assert_eq!(cmd.args, vec!["text-davinci-003".to_string()]);
}

#[test]
fn it_is_short_temperature_set() {
    let cmd = SlashCommand::parse("/t 0.3").unwrap();
    assert!(cmd.is_temperature_set());
    assert_eq!(cmd.args, vec!["0.3".to_string()]);
}
#[test]
fn it_is_temperature_set() {
    let cmd = SlashCommand::parse("/temperature").unwrap();
    assert!(cmd.is_temperature_set());
    assert!(cmd.args.is_empty());
}

#[test]
fn it_is_logical_preset() {
    let cmd = SlashCommand::parse("/logical").unwrap();
    assert_eq!(cmd.preset(), Some(TemperaturePreset::Logical));
}
#[test]
fn it_is_balanced_preset() {
    let cmd = SlashCommand::parse("/balanced").unwrap();
    assert_eq!(cmd.preset(), Some(TemperaturePreset::Balanced));
}
#[test]
fn it_is_creative_preset() {
    let cmd = SlashCommand::parse("/creative").unwrap();
    assert_eq!(cmd.preset(), Some(TemperaturePreset::Creative));
}
#[test]
fn it_is_not_a_preset() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert_eq!(cmd.preset(), None);
}
