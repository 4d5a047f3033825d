use tui_textarea::Input;

use super::TemperaturePreset;

pub enum Event {
    BootstrapFailed(),
    BootstrapResponse(String),
    CompletionFailed(),
    CompletionResponse(String),
    KeyboardCTRLC(),
    KeyboardCTRLN(),
    KeyboardCharInput(Input),
    KeyboardDown(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardPreset(TemperaturePreset),
    KeyboardTab(),
    KeyboardUp(),
    ModelListFailed(),
    ModelListResponse(Vec<String>),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}
