//! Window layout and rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::AngleMode;

/// Width of a mode radio, e.g. `(•) Degrees`
const RADIO_WIDTH: u16 = 11;
/// Gap between the two radios
const RADIO_GAP: u16 = 3;
/// Width of the history side panel
const HISTORY_WIDTH: u16 = 28;

/// Where each part of the window goes for a given terminal area.
///
/// Rendering and click handling both derive from this, so a click always
/// lands on what was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Numeric display, with its border
    pub display: Rect,
    /// `Degrees` radio
    pub degrees: Rect,
    /// `Radians` radio
    pub radians: Rect,
    /// Keypad grid, with its border
    pub keypad: Rect,
    /// History panel, with its border
    pub history: Rect,
}

impl CalculatorLayout {
    /// Computes the layout for the whole terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(HISTORY_WIDTH)])
            .split(inner);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(1), // Mode radios
                Constraint::Min(8),    // Keypad
            ])
            .split(columns[0]);

        let modes = main[1];
        let degrees = Rect::new(
            modes.x.saturating_add(1),
            modes.y,
            RADIO_WIDTH.min(modes.width),
            modes.height,
        );
        let radians = Rect::new(
            degrees.right().saturating_add(RADIO_GAP),
            modes.y,
            RADIO_WIDTH,
            modes.height,
        )
        .intersection(modes);

        Self {
            display: main[0],
            degrees,
            radians,
            keypad: main[2],
            history: columns[1],
        }
    }

    /// The mode radio under a cell, if any
    #[must_use]
    pub fn mode_at(&self, x: u16, y: u16) -> Option<AngleMode> {
        let position = Position::new(x, y);
        if self.degrees.contains(position) {
            Some(AngleMode::Degrees)
        } else if self.radians.contains(position) {
            Some(AngleMode::Radians)
        } else {
            None
        }
    }
}

/// Renders the calculator window to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator window widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator window widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let session = self.app.session();
        let style = if session.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(session.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_radio(area: Rect, buf: &mut Buffer, mode: AngleMode, selected: bool) {
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        buf.set_span(
            area.x,
            area.y,
            &Span::styled(format!("{marker} {}", mode.label()), style),
            area.width,
        );
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from(area.height.saturating_sub(2));
        let items: Vec<ListItem> = self
            .app
            .session()
            .history()
            .iter_rev()
            .take(visible)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.display.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.app.session();

        Block::default()
            .title(format!(" {} ", session.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area);
        self.render_display(layout.display, buf);
        Self::render_radio(
            layout.degrees,
            buf,
            AngleMode::Degrees,
            session.mode() == AngleMode::Degrees,
        );
        Self::render_radio(
            layout.radians,
            buf,
            AngleMode::Radians,
            session.mode() == AngleMode::Radians,
        );
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_history(layout.history, buf);
    }
}
