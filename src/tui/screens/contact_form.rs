//! Contact form screen — field entry, validation, and the submitted values.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::{ContactDraft, ContactField, SubmittedRecord, ValidationErrors};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::submitted::{draw_submitted, submitted_height};

/// State for the contact form screen.
///
/// Owns the field values, the current validation errors, and the record of
/// the last accepted submit.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    form: Form,
    errors: ValidationErrors,
    submitted: Option<SubmittedRecord>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    /// Creates an empty contact form with focus on the first name.
    pub fn new() -> Self {
        Self {
            form: Form::new(
                ContactField::ALL
                    .iter()
                    .map(|field| FormField::new(field.label()))
                    .collect(),
                "Submit",
            ),
            errors: ValidationErrors::default(),
            submitted: None,
        }
    }

    /// Sets `field` to `value` and re-validates that field alone.
    pub fn on_field_change(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_value(field.index(), value);
        self.errors.revalidate(field, self.form.value(field.index()));
        self.sync_errors();
    }

    /// Validates every required field and, if all pass, records the submit.
    ///
    /// Returns `true` when the submit was accepted. A rejected submit keeps
    /// the previously submitted record.
    pub fn submit(&mut self) -> bool {
        let draft = self.draft();
        self.errors = ValidationErrors::for_draft(&draft);
        self.sync_errors();

        if !self.errors.is_empty() {
            return false;
        }
        self.submitted = Some(SubmittedRecord::capture(&draft));
        true
    }

    /// Clears values, errors, and the submitted record.
    pub fn reset(&mut self) {
        self.form.reset();
        self.errors.clear();
        self.submitted = None;
    }

    /// Current field values.
    pub fn draft(&self) -> ContactDraft {
        let mut draft = ContactDraft::default();
        for field in ContactField::ALL {
            draft.set(field, self.form.value(field.index()));
        }
        draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The record of the last accepted submit, if any.
    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// The field under the cursor, or `None` when the submit button has focus.
    pub fn focused_field(&self) -> Option<ContactField> {
        self.form
            .focused_field()
            .and_then(ContactField::from_index)
    }

    /// Moves the cursor to `field`.
    pub fn focus(&mut self, field: ContactField) {
        while self.focused_field() != Some(field) {
            self.form.focus_next();
        }
    }

    fn sync_errors(&mut self) {
        for field in ContactField::ALL {
            let message = self.errors.get(field).map(ToString::to_string);
            self.form.set_error(field.index(), message);
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(field) = self.focused_field() {
            let mut value = self.form.value(field.index()).to_string();
            edit(&mut value);
            self.on_field_change(field, value);
        }
    }
}

impl ScreenState for ContactFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('r') => {
                    self.reset();
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.edit_focused(|value| value.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Enter => {
                self.submit();
                Action::None
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Rows taken by the header and by the footer.
const HEADER_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 1;

/// Splits the rows left over after the header, form, and footer.
///
/// The inputs always get their full height. The gap under the header goes
/// first, then the submitted panel is clipped to whatever remains.
/// Returns `(gap, submitted)`.
fn spare_rows(height: u16, form_rows: u16, submitted_rows: u16) -> (u16, u16) {
    let spare = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS + form_rows);
    let gap = u16::from(spare > submitted_rows);
    (gap, submitted_rows.min(spare - gap))
}

/// Renders the contact form screen.
#[mutants::skip]
pub fn draw_contact_form(state: &ContactFormState, frame: &mut Frame, area: Rect) {
    let form_rows = state.form().height();
    let (gap_rows, submitted_rows) = spare_rows(
        area.height,
        form_rows,
        state.submitted().map_or(0, submitted_height),
    );

    let [header_area, _gap, form_area, submitted_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(HEADER_ROWS),
            Constraint::Length(gap_rows),
            Constraint::Length(form_rows),
            Constraint::Length(submitted_rows),
            Constraint::Min(0),
            Constraint::Length(FOOTER_ROWS),
        ])
        .areas(area);

    let header = Paragraph::new(Line::from("Contact Form")).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, header_area);

    draw_form(state.form(), frame, form_area);

    if let Some(record) = state.submitted() {
        draw_submitted(record, frame, submitted_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl+R: clear  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
