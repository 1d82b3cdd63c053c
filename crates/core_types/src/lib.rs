//! Shared event vocabulary between the page host and the controls it drives.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    /// A printable character, after keyboard layout resolution.
    Char(char),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` string onto a [`Key`].
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let key = match key {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => {
                let mut chars = key.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Key::Char(ch)
            }
        };
        Some(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDown {
    pub key: Key,
    pub shift: bool,
}

impl KeyDown {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }
}

/// What the host should do with an event after a handler has seen it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposition {
    #[default]
    Default,
    PreventDefault,
}

impl Disposition {
    pub fn is_prevented(self) -> bool {
        self == Disposition::PreventDefault
    }
}
