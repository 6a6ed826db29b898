/// Message dialog: one message at a time, one dismiss action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialog {
    message: Option<String>,
}

impl Dialog {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
