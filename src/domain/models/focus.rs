#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Models,
    Temperature,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Input => return Focus::Models,
            Focus::Models => return Focus::Temperature,
            Focus::Temperature => return Focus::Input,
        }
    }
}
