#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum PopupType {
    #[default]
    None,
    Error(String),
}

#[derive(Debug, Default)]
pub struct PopupState {
    pub current: PopupType,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    pub(super) fn open(&mut self, popup: PopupType) {
        self.current = popup
    }

    pub(super) fn close(&mut self) {
        self.current = PopupType::None;
    }
}
