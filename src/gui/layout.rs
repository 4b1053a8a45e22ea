use eframe::egui;

use super::constants::SELECTOR_ROWS;

/// Uniform scale that fits `image` inside `target` (may upscale)
pub fn fit_scale(image: egui::Vec2, target: egui::Vec2) -> f32 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return 0.0;
    }
    (target.x / image.x).min(target.y / image.y).max(0.0)
}

pub fn fit_size(image: egui::Vec2, target: egui::Vec2) -> egui::Vec2 {
    image * fit_scale(image, target)
}

/// Number of columns needed for `count` buttons
pub fn selector_columns(count: usize) -> usize {
    count.div_ceil(SELECTOR_ROWS)
}

/// Index shown at `(row, column)`, if any.
/// Buttons fill a column of `SELECTOR_ROWS` before wrapping to the next.
pub fn selector_index(row: usize, column: usize, count: usize) -> Option<usize> {
    let index = column * SELECTOR_ROWS + row;
    (row < SELECTOR_ROWS && index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector_cell(index: usize) -> (usize, usize) {
        (index % SELECTOR_ROWS, index / SELECTOR_ROWS)
    }

    #[test]
    fn test_fit_scale_limited_by_height() {
        let scale = fit_scale(egui::vec2(100.0, 200.0), egui::vec2(300.0, 100.0));
        assert_eq!(scale, 0.5);
        assert_eq!(fit_size(egui::vec2(100.0, 200.0), egui::vec2(300.0, 100.0)), egui::vec2(50.0, 100.0));
    }

    #[test]
    fn test_fit_scale_limited_by_width_and_upscales() {
        assert_eq!(fit_scale(egui::vec2(70.0, 70.0), egui::vec2(140.0, 500.0)), 2.0);
    }

    #[test]
    fn test_fit_scale_degenerate_image() {
        assert_eq!(fit_scale(egui::vec2(0.0, 10.0), egui::vec2(100.0, 100.0)), 0.0);
    }

    #[test]
    fn test_selector_cells_are_column_major() {
        assert_eq!(selector_cell(0), (0, 0));
        assert_eq!(selector_cell(5), (5, 0));
        assert_eq!(selector_cell(6), (0, 1));
        assert_eq!(selector_cell(13), (1, 2));
    }

    #[test]
    fn test_selector_index_inverts_cell() {
        for i in 0..20 {
            let (row, column) = selector_cell(i);
            assert_eq!(selector_index(row, column, 20), Some(i));
        }
        assert_eq!(selector_index(2, 3, 20), None);
    }

    #[test]
    fn test_selector_columns() {
        assert_eq!(selector_columns(0), 0);
        assert_eq!(selector_columns(6), 1);
        assert_eq!(selector_columns(7), 2);
    }
}
