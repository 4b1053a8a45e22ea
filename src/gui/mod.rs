//! Display/interaction shell on eframe/egui

pub mod app;
pub mod components;
pub mod constants;
pub mod layout;
pub mod shell;
pub mod viewport;

pub use app::run_gui;

/// User intents produced by widgets and keys, applied once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleChrome,
    Close,
    SetAlwaysOnTop(bool),
    OpenForm,
    SubmitForm,
    CancelForm,
    Delete,
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
    Prev,
    Next,
    Select(usize),
}
