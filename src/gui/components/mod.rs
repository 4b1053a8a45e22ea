pub mod code_form;
pub mod control_bar;
pub mod dialogs;
pub mod display;
pub mod selector_strip;
pub mod title_bar;
