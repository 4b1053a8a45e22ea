//! UI mode state, independent of any widget tree

use crate::error::CodeError;
use crate::types::{CodeType, Variant};

/// Everything except the title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Visible,
    Hidden,
}

/// Contents of the entry form while it is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub text: String,
    pub code_type: CodeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking message dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Information",
            NoticeKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub chrome: Chrome,
    pub form: Option<EntryForm>,
    pub notice: Option<Notice>,
    pub confirm_delete: bool,
    pub always_on_top: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            chrome: Chrome::Visible,
            form: None,
            notice: None,
            confirm_delete: false,
            always_on_top: true,
        }
    }

    /// Flip chrome visibility, returning the new state
    pub fn toggle_chrome(&mut self) -> Chrome {
        self.chrome = match self.chrome {
            Chrome::Visible => Chrome::Hidden,
            Chrome::Hidden => Chrome::Visible,
        };
        self.chrome
    }

    /// Always starts with an empty payload and the variant's default type
    pub fn open_form(&mut self, variant: Variant) {
        self.form = Some(EntryForm {
            text: String::new(),
            code_type: variant.default_code_type(),
        });
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn form_shown(&self) -> bool {
        self.form.is_some()
    }

    pub fn show_error(&mut self, error: &CodeError) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: error.to_string(),
        });
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        });
    }

    /// A dialog is open and the rest of the window ignores input
    pub fn has_modal(&self) -> bool {
        self.notice.is_some() || self.confirm_delete
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_chrome_round_trip() {
        let mut state = ShellState::new();
        assert_eq!(state.chrome, Chrome::Visible);
        assert_eq!(state.toggle_chrome(), Chrome::Hidden);
        assert_eq!(state.toggle_chrome(), Chrome::Visible);
    }

    #[test]
    fn test_open_form_uses_variant_default_type() {
        let mut state = ShellState::new();
        state.open_form(Variant::Overlay);
        assert_eq!(state.form.as_ref().unwrap().code_type, CodeType::Qr);

        state.open_form(Variant::PerUser);
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.code_type, CodeType::DataMatrix);
        assert!(form.text.is_empty());
    }

    #[test]
    fn test_close_form() {
        let mut state = ShellState::new();
        state.open_form(Variant::PerUser);
        assert!(state.form_shown());
        state.close_form();
        assert!(!state.form_shown());
    }

    #[test]
    fn test_notice_makes_modal() {
        let mut state = ShellState::new();
        assert!(!state.has_modal());

        state.show_error(&CodeError::Validation);
        assert!(state.has_modal());
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title(), "Error");

        state.notice = None;
        state.confirm_delete = true;
        assert!(state.has_modal());
    }

    #[test]
    fn test_always_on_top_starts_enabled() {
        assert!(ShellState::new().always_on_top);
    }
}
