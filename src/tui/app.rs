use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactFormState, HelpState, draw_contact_form, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// The contact form and its submitted values.
    #[default]
    ContactForm,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    contact_form: ContactFormState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on an empty contact form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::ContactForm => draw_contact_form(&self.contact_form, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key press by routing it to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::ContactForm => self.contact_form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form state.
    pub fn contact_form(&self) -> &ContactFormState {
        &self.contact_form
    }
}
