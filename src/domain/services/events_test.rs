use tui_textarea::Input;
use tui_textarea::Key;

use super::map_input;
use crate::domain::models::Event;
use crate::domain::models::TemperaturePreset;

fn key(key: Key) -> Input {
    return Input {
        key,
        ctrl: false,
        alt: false,
    };
}

fn ctrl(char: char) -> Input {
    return Input {
        key: Key::Char(char),
        ctrl: true,
        alt: false,
    };
}

#[test]
fn it_maps_navigation_keys() {
    assert!(matches!(map_input(key(Key::Up)), Event::KeyboardUp()));
    assert!(matches!(map_input(key(Key::Down)), Event::KeyboardDown()));
    assert!(matches!(map_input(key(Key::Tab)), Event::KeyboardTab()));
    assert!(matches!(map_input(key(Key::Enter)), Event::KeyboardEnter()));
    assert!(matches!(
        map_input(key(Key::PageUp)),
        Event::UIScrollPageUp()
    ));
    assert!(matches!(
        map_input(key(Key::PageDown)),
        Event::UIScrollPageDown()
    ));
}

#[test]
fn it_maps_function_keys_to_presets() {
    assert!(matches!(
        map_input(key(Key::F(1))),
        Event::KeyboardPreset(TemperaturePreset::Logical)
    ));
    assert!(matches!(
        map_input(key(Key::F(2))),
        Event::KeyboardPreset(TemperaturePreset::Balanced)
    ));
    assert!(matches!(
        map_input(key(Key::F(3))),
        Event::KeyboardPreset(TemperaturePreset::Creative)
    ));
    assert!(matches!(
        map_input(key(Key::F(4))),
        Event::KeyboardCharInput(_)
    ));
}

#[test]
fn it_maps_control_shortcuts() {
    assert!(matches!(map_input(ctrl('c')), Event::KeyboardCTRLC()));
    assert!(matches!(map_input(ctrl('n')), Event::KeyboardCTRLN()));
    assert!(matches!(map_input(ctrl('u')), Event::UIScrollPageUp()));
    assert!(matches!(map_input(ctrl('d')), Event::UIScrollPageDown()));
}

#[test]
fn it_forwards_plain_characters() {
    assert!(matches!(
        map_input(key(Key::Char('n'))),
        Event::KeyboardCharInput(Input {
            key: Key::Char('n'),
            ctrl: false,
            ..
        })
    ));
}
