//! Reusable form widget: labeled text inputs followed by a submit button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one input box including its borders.
const INPUT_HEIGHT: u16 = 3;
/// Height of the error line under an invalid input.
const ERROR_HEIGHT: u16 = 1;
/// Height of the submit button row.
const BUTTON_HEIGHT: u16 = 1;

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label, shown as the input's title.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
}

impl FormField {
    /// Creates a new, empty form field.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
        }
    }
}

/// Which element of a [`Form`] holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// The input at this index.
    Field(usize),
    /// The submit button after the last input.
    Submit,
}

/// A multi-field text form with focus management.
///
/// Focus cycles through every field and then the submit button.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    submit_label: String,
    focus: usize,
}

impl Form {
    /// Creates a new form. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>, submit_label: impl Into<String>) -> Self {
        Self {
            fields,
            submit_label: submit_label.into(),
            focus: 0,
        }
    }

    /// Returns the currently focused element.
    pub fn focus(&self) -> FormFocus {
        if self.focus < self.fields.len() {
            FormFocus::Field(self.focus)
        } else {
            FormFocus::Submit
        }
    }

    /// Index of the focused field, or `None` when the button is focused.
    pub fn focused_field(&self) -> Option<usize> {
        match self.focus() {
            FormFocus::Field(i) => Some(i),
            FormFocus::Submit => None,
        }
    }

    /// Moves focus to the next element, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.stops();
    }

    /// Moves focus to the previous element, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.stops() - 1) % self.stops();
    }

    fn stops(&self) -> usize {
        self.fields.len() + 1
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Sets or clears the error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: Option<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = error;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Resets all field values, errors, and focus.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Rows needed to draw the whole form.
    ///
    /// Only invalid fields take an error line.
    pub fn height(&self) -> u16 {
        self.fields
            .iter()
            .map(|f| {
                if f.error.is_some() {
                    INPUT_HEIGHT + ERROR_HEIGHT
                } else {
                    INPUT_HEIGHT
                }
            })
            .fold(BUTTON_HEIGHT, u16::saturating_add)
    }
}

/// Renders a form within the given area.
///
/// An invalid input is followed by a line holding `Error: <message>`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = Vec::new();
    for field in &form.fields {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
        if field.error.is_some() {
            constraints.push(Constraint::Length(ERROR_HEIGHT));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let rows = Layout::vertical(constraints).split(area);
    let mut row = rows.iter().copied();
    let focus = form.focus();

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = focus == FormFocus::Field(i);
        let input_area = row.next().unwrap_or_default();

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

        if let Some(ref err) = field.error {
            let error_area = row.next().unwrap_or_default();
            let error_line = Paragraph::new(Span::styled(
                format!("Error: {err}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(error_line, error_area.inner(Margin::new(1, 0)));
        }
    }

    let button_style = if focus == FormFocus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let button = Paragraph::new(Span::styled(
        format!("[ {} ]", form.submit_label),
        button_style,
    ));
    frame.render_widget(button, row.next().unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_form() -> Form {
        Form::new(
            vec![
                FormField::new("First Name*"),
                FormField::new("Last Name*"),
                FormField::new("Message"),
            ],
            "Submit",
        )
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_on_first_field() {
        let form = make_form();
        assert_eq!(form.focus(), FormFocus::Field(0));
        assert_eq!(form.focused_field(), Some(0));
    }

    #[test]
    fn focus_next_reaches_submit_then_wraps() {
        let mut form = make_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Field(2));
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Submit);
        assert_eq!(form.focused_field(), None);
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Field(0));
    }

    #[test]
    fn focus_prev_wraps_to_submit() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), FormFocus::Submit);
        form.focus_prev();
        assert_eq!(form.focus(), FormFocus::Field(2));
    }

    #[test]
    fn empty_form_only_has_submit() {
        let mut form = Form::new(vec![], "Go");
        assert_eq!(form.focus(), FormFocus::Submit);
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Submit);
        form.focus_prev();
        assert_eq!(form.focus(), FormFocus::Submit);
    }

    // --- Values ---

    #[test]
    fn set_value_replaces_field() {
        let mut form = make_form();
        form.set_value(1, "Lastname");
        assert_eq!(form.value(1), "Lastname");
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn set_value_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_value(99, "nope");
        assert_eq!(form.value(99), "");
    }

    // --- Errors ---

    #[test]
    fn set_and_clear_error() {
        let mut form = make_form();
        form.set_error(0, Some("bad".into()));
        assert!(form.has_errors());
        assert_eq!(form.fields()[0].error.as_deref(), Some("bad"));
        form.set_error(0, None);
        assert!(!form.has_errors());
    }

    // --- Reset ---

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = make_form();
        form.set_value(0, "X");
        form.set_error(0, Some("err".into()));
        form.focus_next();
        form.reset();
        assert_eq!(form.value(0), "");
        assert!(!form.has_errors());
        assert_eq!(form.focus(), FormFocus::Field(0));
    }

    #[test]
    fn height_covers_inputs_and_button() {
        assert_eq!(make_form().height(), 3 * 3 + 1);
    }

    #[test]
    fn height_adds_a_row_per_error() {
        let mut form = make_form();
        form.set_error(0, Some("a".into()));
        form.set_error(2, Some("b".into()));
        assert_eq!(form.height(), 3 * 3 + 2 + 1);
    }

    // --- Rendering ---

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(form: &Form) -> String {
        let backend = TestBackend::new(50, form.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_form(form, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_labels_values_and_button() {
        let mut form = make_form();
        form.set_value(0, "Firstname");
        let output = render(&form);
        assert!(output.contains("First Name*"));
        assert!(output.contains("Message"));
        assert!(output.contains("Firstname"));
        assert!(output.contains("[ Submit ]"));
    }

    #[test]
    fn renders_one_error_line_per_invalid_field() {
        let mut form = make_form();
        form.set_error(0, Some("too short".into()));
        form.set_error(1, Some("required".into()));
        let output = render(&form);
        assert_eq!(output.matches("Error:").count(), 2);
        assert!(output.contains("Error: too short"));
        assert!(output.contains("Error: required"));
    }

    #[test]
    fn renders_no_error_lines_when_clean() {
        let output = render(&make_form());
        assert!(!output.contains("Error"));
    }
}
