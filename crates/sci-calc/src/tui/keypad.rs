//! Drawing the keypad and mapping clicks back onto it

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonKind, Keypad};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

/// Area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Size of one button cell, `None` when the area is too small
fn cell_size(keypad: &Keypad, inner: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let width = inner.width / u16::try_from(cols).ok()?;
    let height = inner.height / u16::try_from(rows).ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position inside the keypad `area` to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
        return None;
    }
    let (btn_width, btn_height) = cell_size(keypad, inner)?;

    let col = usize::from((x - inner.x) / btn_width);
    let row = usize::from((y - inner.y) / btn_height);

    let (rows, cols) = keypad.dimensions();
    (row < rows && col < cols).then_some(row * cols + col)
}

/// Center of the button at `index`, the inverse of [`hit_test`]
#[must_use]
pub fn button_center(keypad: &Keypad, area: Rect, index: usize) -> Option<(u16, u16)> {
    if index >= keypad.button_count() {
        return None;
    }
    let inner = inner_area(area);
    let (btn_width, btn_height) = cell_size(keypad, inner)?;
    let (_, cols) = keypad.dimensions();
    let row = u16::try_from(index / cols).ok()?;
    let col = u16::try_from(index % cols).ok()?;

    Some((
        inner.x + col * btn_width + btn_width / 2,
        inner.y + row * btn_height + btn_height / 2,
    ))
}

fn button_style(kind: ButtonKind, pressed: bool) -> Style {
    let (r, g, b) = kind.rgb();
    let style = Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b));
    if pressed {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = cell_size(self.keypad, inner) else {
            return;
        };
        if btn_width < 3 {
            return;
        }

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
                continue;
            };
            let x = inner.x + col * btn_width;
            let y = inner.y + row * btn_height;
            let style = button_style(btn.kind(), btn.pressed);

            // Fill the whole cell minus a one column gap
            let cell = Rect::new(x, y, btn_width.saturating_sub(1), btn_height);
            buf.set_style(cell, style);

            let label_width = u16::try_from(btn.label.len()).unwrap_or(btn_width);
            let label_x = x + btn_width.saturating_sub(1).saturating_sub(label_width) / 2;
            let label_y = y + btn_height.saturating_sub(1) / 2;
            buf.set_span(
                label_x,
                label_y,
                &Span::styled(btn.label, style.add_modifier(Modifier::BOLD)),
                btn_width.saturating_sub(1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        // 5 columns of 8, 6 rows of 2, plus the border
        Rect::new(10, 5, 42, 14)
    }

    // ===== hit_test tests =====

    #[test]
    fn test_hit_test_first_button() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 11, 6), Some(0));
    }

    #[test]
    fn test_hit_test_last_button() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 50, 17), Some(29));
    }

    #[test]
    fn test_hit_test_row_and_column() {
        let keypad = Keypad::new();
        // column 2, row 4 is "="
        let idx = hit_test(&keypad, area(), 11 + 2 * 8 + 3, 6 + 4 * 2).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label, "=");
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        assert!(hit_test(&keypad, area(), 10, 5).is_none());
        assert!(hit_test(&keypad, area(), 51, 10).is_none());
        assert!(hit_test(&keypad, area(), 30, 18).is_none());
        assert!(hit_test(&keypad, area(), 0, 0).is_none());
        assert!(hit_test(&keypad, area(), 200, 200).is_none());
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert!(hit_test(&keypad, Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    #[test]
    fn test_button_center_round_trips() {
        let keypad = Keypad::new();
        for idx in 0..keypad.button_count() {
            let (x, y) = button_center(&keypad, area(), idx).unwrap();
            assert_eq!(hit_test(&keypad, area(), x, y), Some(idx));
        }
    }

    #[test]
    fn test_button_center_out_of_range() {
        let keypad = Keypad::new();
        assert!(button_center(&keypad, area(), 30).is_none());
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(area());
        KeypadWidget::new(&keypad).render(area(), &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        for label in ["sqrt", "log", "ln", "abs", "pi", "sin", "Ans"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_widget_colors_by_kind() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(area());
        KeypadWidget::new(&keypad).render(area(), &mut buf);

        let (r, g, b) = ButtonKind::Clear.rgb();
        assert_eq!(buf[(11, 6)].bg, Color::Rgb(r, g, b));
    }

    #[test]
    fn test_widget_too_small_does_not_panic() {
        let keypad = Keypad::new();
        let small = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(small);
        KeypadWidget::new(&keypad).render(small, &mut buf);
    }
}
