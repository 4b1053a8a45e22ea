//! Window-level effects expressed as egui viewport commands
//!
//! Everything goes through [`ViewportCtx`] so the sizing, stacking and drag
//! logic can be exercised without a running window.

use eframe::egui;
use tracing::debug;

use super::constants::TITLE_BAR_HEIGHT;
use super::shell::Chrome;

pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);

    /// Current inner width of the window in points, if known
    fn inner_width(&self) -> Option<f32>;
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn inner_width(&self) -> Option<f32> {
        self.input(|i| i.viewport().inner_rect.map(|r| r.width()))
    }
}

/// Resize for the given chrome state: title bar only when hidden, the
/// variant's full size when shown.
pub fn apply_chrome(ctx: &impl ViewportCtx, chrome: Chrome, full_size: egui::Vec2) {
    let size = match chrome {
        Chrome::Hidden => {
            let width = ctx.inner_width().unwrap_or(full_size.x);
            egui::vec2(width, TITLE_BAR_HEIGHT)
        }
        Chrome::Visible => full_size,
    };
    debug!(?chrome, width = size.x, height = size.y, "Resizing window");
    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
}

pub fn apply_always_on_top(ctx: &impl ViewportCtx, on_top: bool) {
    let level = if on_top {
        egui::WindowLevel::AlwaysOnTop
    } else {
        egui::WindowLevel::Normal
    };
    ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
}

/// Title-bar drag tracking.
///
/// On press the pointer offset inside the window is recorded; each motion
/// moves the window so that offset stays under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    offset: Option<egui::Vec2>,
}

impl DragState {
    pub fn begin(&mut self, pointer_in_window: egui::Pos2) {
        self.offset = Some(pointer_in_window.to_vec2());
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }

    /// Window position for a pointer at `pointer_on_screen`, while tracking
    pub fn target(&self, pointer_on_screen: egui::Pos2) -> Option<egui::Pos2> {
        self.offset.map(|offset| pointer_on_screen - offset)
    }

    /// Send the move for one motion event. No bounds clamping.
    pub fn motion(&self, ctx: &impl ViewportCtx, pointer_on_screen: egui::Pos2) {
        if let Some(position) = self.target(pointer_on_screen) {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(position));
        }
    }

    pub fn end(&mut self) {
        self.offset = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct MockCtx {
        pub commands: RefCell<Vec<egui::ViewportCommand>>,
        pub width: Option<f32>,
    }

    impl ViewportCtx for MockCtx {
        fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
            self.commands.borrow_mut().push(cmd);
        }

        fn inner_width(&self) -> Option<f32> {
            self.width
        }
    }

    #[test]
    fn test_hide_chrome_keeps_width_and_collapses_height() {
        let ctx = MockCtx {
            width: Some(420.0),
            ..Default::default()
        };
        apply_chrome(&ctx, Chrome::Hidden, egui::vec2(350.0, 250.0));

        let cmds = ctx.commands.borrow();
        assert_eq!(cmds.len(), 1);
        match cmds[0] {
            egui::ViewportCommand::InnerSize(size) => {
                assert_eq!(size, egui::vec2(420.0, TITLE_BAR_HEIGHT));
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_hide_chrome_without_known_width_uses_full_width() {
        let ctx = MockCtx::default();
        apply_chrome(&ctx, Chrome::Hidden, egui::vec2(350.0, 250.0));
        assert!(matches!(
            ctx.commands.borrow()[0],
            egui::ViewportCommand::InnerSize(size) if size == egui::vec2(350.0, TITLE_BAR_HEIGHT)
        ));
    }

    #[test]
    fn test_show_chrome_restores_full_size() {
        let ctx = MockCtx {
            width: Some(420.0),
            ..Default::default()
        };
        apply_chrome(&ctx, Chrome::Visible, egui::vec2(350.0, 250.0));
        assert!(matches!(
            ctx.commands.borrow()[0],
            egui::ViewportCommand::InnerSize(size) if size == egui::vec2(350.0, 250.0)
        ));
    }

    #[test]
    fn test_always_on_top_levels() {
        let ctx = MockCtx::default();
        apply_always_on_top(&ctx, true);
        apply_always_on_top(&ctx, false);

        let cmds = ctx.commands.borrow();
        assert!(matches!(
            cmds[0],
            egui::ViewportCommand::WindowLevel(egui::WindowLevel::AlwaysOnTop)
        ));
        assert!(matches!(
            cmds[1],
            egui::ViewportCommand::WindowLevel(egui::WindowLevel::Normal)
        ));
    }

    #[test]
    fn test_drag_moves_window_by_recorded_offset() {
        let ctx = MockCtx::default();
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());

        drag.begin(egui::pos2(30.0, 10.0));
        drag.motion(&ctx, egui::pos2(530.0, 410.0));

        let cmds = ctx.commands.borrow();
        match cmds[0] {
            egui::ViewportCommand::OuterPosition(pos) => {
                assert_eq!(pos, egui::pos2(500.0, 400.0));
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_drag_allows_negative_positions() {
        let mut drag = DragState::default();
        drag.begin(egui::pos2(50.0, 12.0));
        assert_eq!(drag.target(egui::pos2(10.0, 5.0)), Some(egui::pos2(-40.0, -7.0)));
    }

    #[test]
    fn test_motion_after_release_is_ignored() {
        let ctx = MockCtx::default();
        let mut drag = DragState::default();
        drag.begin(egui::pos2(5.0, 5.0));
        drag.end();
        drag.motion(&ctx, egui::pos2(100.0, 100.0));

        assert!(!drag.is_dragging());
        assert!(ctx.commands.borrow().is_empty());
    }
}
