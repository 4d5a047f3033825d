use super::Prompt;

pub enum Action {
    Bootstrap(String),
    ListModels(),
    Submit(Prompt),
}
