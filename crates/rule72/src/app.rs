#![forbid(unsafe_code)]

//! The application model: focus ring, key routing, and the
//! submit / switch-language state transitions.
//!
//! The message area is a single `Option<DisplayMessage>`, so a result
//! and an error can never be on screen at the same time; submitting
//! always replaces whatever was shown before.

use r72_core::{Event, KeyCode, KeyEvent};
use r72_i18n::{Lang, strings};
use r72_render::Frame;
use r72_runtime::{Cmd, Model};
use r72_widgets::TextInput;

use crate::calc::{self, DisplayMessage, ValidationError};
use crate::{theme, ui};

/// Longest accepted input, in grapheme clusters.
const INPUT_MAX_LEN: usize = 32;

/// The focusable slots, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    Rate,
    Calculate,
    Language,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Rate,
            Self::Rate => Self::Calculate,
            Self::Calculate => Self::Language,
            Self::Language => Self::Amount,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Language,
            Self::Rate => Self::Amount,
            Self::Calculate => Self::Rate,
            Self::Language => Self::Calculate,
        }
    }
}

/// Top-level message type; today every message is a terminal event.
#[derive(Debug)]
pub enum Msg {
    Event(Event),
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

pub struct CalculatorModel {
    lang: Lang,
    amount: TextInput,
    rate: TextInput,
    message: Option<DisplayMessage>,
    focus: Focus,
}

impl CalculatorModel {
    #[must_use]
    pub fn new(lang: Lang) -> Self {
        let table = strings(lang);
        let amount = TextInput::new()
            .with_placeholder(table.amount_placeholder)
            .with_max_length(INPUT_MAX_LEN)
            .with_style(theme::input())
            .with_placeholder_style(theme::placeholder())
            .with_focused(true);
        let rate = TextInput::new()
            .with_placeholder(table.rate_placeholder)
            .with_max_length(INPUT_MAX_LEN)
            .with_style(theme::input())
            .with_placeholder_style(theme::placeholder());
        Self {
            lang,
            amount,
            rate,
            message: None,
            focus: Focus::Amount,
        }
    }

    #[must_use]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn message(&self) -> Option<&DisplayMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn amount_input(&self) -> &TextInput {
        &self.amount
    }

    #[must_use]
    pub fn rate_input(&self) -> &TextInput {
        &self.rate
    }

    /// Switch the display language. Labels and placeholders come from
    /// the new table on the next frame and any message is cleared, but
    /// typed values stay as they are. Selecting the language that is
    /// already active does exactly the same, so repeated switches
    /// converge on one state.
    pub fn switch_language(&mut self, lang: Lang) {
        self.lang = lang;
        let table = strings(lang);
        self.amount.set_placeholder(table.amount_placeholder);
        self.rate.set_placeholder(table.rate_placeholder);
        self.hide_messages();
        tracing::debug!(lang = lang.code(), "language switched");
    }

    fn submit(&mut self) {
        self.hide_messages();
        match calc::calculate_years(self.amount.value(), self.rate.value(), self.lang) {
            Ok(message) => {
                tracing::info!(
                    amount = self.amount.value(),
                    rate = self.rate.value(),
                    result = %message.plain(),
                    "calculated"
                );
                self.show_result(message);
            }
            Err(error) => {
                tracing::debug!(%error, "submission rejected");
                self.show_error(error);
            }
        }
    }

    fn show_result(&mut self, message: DisplayMessage) {
        self.message = Some(message);
    }

    fn show_error(&mut self, error: ValidationError) {
        self.message = Some(DisplayMessage::Error(error.message(self.lang)));
    }

    fn hide_messages(&mut self) {
        self.message = None;
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.amount.set_focused(focus == Focus::Amount);
        self.rate.set_focused(focus == Focus::Rate);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.code == KeyCode::Escape || key.is_ctrl('c') {
            return Cmd::quit();
        }
        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return Cmd::none();
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return Cmd::none();
            }
            // Enter submits from anywhere in the ring, not only the button.
            KeyCode::Enter => {
                self.submit();
                return Cmd::none();
            }
            _ => {}
        }
        match self.focus {
            Focus::Amount => {
                self.amount.handle_event(&Event::Key(key));
            }
            Focus::Rate => {
                self.rate.handle_event(&Event::Key(key));
            }
            Focus::Language => match key.code {
                KeyCode::Left => self.switch_language(Lang::En),
                KeyCode::Right => self.switch_language(Lang::Np),
                _ => {}
            },
            Focus::Calculate => {}
        }
        Cmd::none()
    }
}

impl Model for CalculatorModel {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        tracing::debug!(lang = self.lang.code(), "calculator ready");
        Cmd::none()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        let Msg::Event(event) = msg;
        match event {
            Event::Key(key) if key.is_press() => self.handle_key(key),
            Event::Paste(_) => {
                match self.focus {
                    Focus::Amount => {
                        self.amount.handle_event(&event);
                    }
                    Focus::Rate => {
                        self.rate.handle_event(&event);
                    }
                    Focus::Calculate | Focus::Language => {}
                }
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        ui::draw(self, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use r72_core::{KeyEventKind, Modifiers};

    fn press(model: &mut CalculatorModel, code: KeyCode) -> Cmd<Msg> {
        model.update(Msg::Event(Event::Key(KeyEvent::new(code))))
    }

    fn ctrl_press(model: &mut CalculatorModel, c: char) -> Cmd<Msg> {
        model.update(Msg::Event(Event::Key(
            KeyEvent::new(KeyCode::Char(c)).with_modifiers(Modifiers::CTRL),
        )))
    }

    fn type_str(model: &mut CalculatorModel, text: &str) {
        for ch in text.chars() {
            press(model, KeyCode::Char(ch));
        }
    }

    fn filled_model(amount: &str, rate: &str) -> CalculatorModel {
        let mut model = CalculatorModel::new(Lang::En);
        type_str(&mut model, amount);
        press(&mut model, KeyCode::Tab);
        type_str(&mut model, rate);
        model
    }

    #[test]
    fn starts_on_amount_in_english() {
        let model = CalculatorModel::new(Lang::En);
        assert_eq!(model.lang(), Lang::En);
        assert_eq!(model.focus(), Focus::Amount);
        assert!(model.amount_input().focused());
        assert!(!model.rate_input().focused());
        assert!(model.message().is_none());
    }

    #[test]
    fn tab_cycles_focus_forward_and_wraps() {
        let mut model = CalculatorModel::new(Lang::En);
        let mut seen = vec![model.focus()];
        for _ in 0..4 {
            press(&mut model, KeyCode::Tab);
            seen.push(model.focus());
        }
        assert_eq!(
            seen,
            vec![
                Focus::Amount,
                Focus::Rate,
                Focus::Calculate,
                Focus::Language,
                Focus::Amount,
            ]
        );
    }

    #[test]
    fn back_tab_cycles_in_reverse() {
        let mut model = CalculatorModel::new(Lang::En);
        press(&mut model, KeyCode::BackTab);
        assert_eq!(model.focus(), Focus::Language);
        press(&mut model, KeyCode::BackTab);
        assert_eq!(model.focus(), Focus::Calculate);
        assert!(!model.amount_input().focused());
    }

    #[test]
    fn typing_lands_in_the_focused_input() {
        let model = filled_model("1000", "8");
        assert_eq!(model.amount_input().value(), "1000");
        assert_eq!(model.rate_input().value(), "8");
    }

    #[test]
    fn enter_submits_from_every_focus_slot() {
        let mut model = filled_model("1000", "8");
        for _ in 0..4 {
            let focus = model.focus();
            press(&mut model, KeyCode::Enter);
            assert!(
                matches!(model.message(), Some(DisplayMessage::Result(_))),
                "no result at focus {focus:?}"
            );
            model.hide_messages();
            press(&mut model, KeyCode::Tab);
        }
    }

    #[test]
    fn invalid_amount_shows_the_amount_error() {
        let mut model = filled_model("-5", "10");
        press(&mut model, KeyCode::Enter);
        assert_eq!(
            model.message(),
            Some(&DisplayMessage::Error(strings(Lang::En).amount_error))
        );
    }

    #[test]
    fn valid_submission_replaces_a_prior_error() {
        let mut model = CalculatorModel::new(Lang::En);
        press(&mut model, KeyCode::Enter);
        assert!(matches!(model.message(), Some(DisplayMessage::Error(_))));

        type_str(&mut model, "1000");
        press(&mut model, KeyCode::Tab);
        type_str(&mut model, "8");
        press(&mut model, KeyCode::Enter);
        assert!(matches!(model.message(), Some(DisplayMessage::Result(_))));
    }

    #[test]
    fn language_switch_clears_message_but_keeps_values() {
        let mut model = filled_model("1000", "8");
        press(&mut model, KeyCode::Enter);
        assert!(model.message().is_some());

        press(&mut model, KeyCode::Tab);
        press(&mut model, KeyCode::Tab);
        assert_eq!(model.focus(), Focus::Language);
        press(&mut model, KeyCode::Right);

        assert_eq!(model.lang(), Lang::Np);
        assert!(model.message().is_none());
        assert_eq!(model.amount_input().value(), "1000");
        assert_eq!(model.rate_input().value(), "8");
        assert_eq!(
            model.amount_input().placeholder(),
            strings(Lang::Np).amount_placeholder
        );
    }

    #[test]
    fn switching_to_the_active_language_changes_nothing_more() {
        let mut model = filled_model("1000", "8");
        model.switch_language(Lang::Np);
        let once = (
            model.lang(),
            model.message().cloned(),
            model.amount_input().placeholder().to_string(),
        );
        model.switch_language(Lang::Np);
        let twice = (
            model.lang(),
            model.message().cloned(),
            model.amount_input().placeholder().to_string(),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn left_and_right_only_switch_on_the_language_bar() {
        let mut model = filled_model("1000", "8");
        assert_eq!(model.focus(), Focus::Rate);
        press(&mut model, KeyCode::Left);
        assert_eq!(model.lang(), Lang::En);

        press(&mut model, KeyCode::Tab);
        press(&mut model, KeyCode::Left);
        assert_eq!(model.lang(), Lang::En);

        press(&mut model, KeyCode::Tab);
        assert_eq!(model.focus(), Focus::Language);
        press(&mut model, KeyCode::Right);
        assert_eq!(model.lang(), Lang::Np);
        press(&mut model, KeyCode::Left);
        assert_eq!(model.lang(), Lang::En);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut model = CalculatorModel::new(Lang::En);
        assert!(matches!(press(&mut model, KeyCode::Escape), Cmd::Quit));
        assert!(matches!(ctrl_press(&mut model, 'c'), Cmd::Quit));
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut model = filled_model("1000", "8");
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Release,
        };
        model.update(Msg::Event(Event::Key(release)));
        assert!(model.message().is_none());
    }

    #[test]
    fn paste_goes_to_the_focused_input() {
        let mut model = CalculatorModel::new(Lang::En);
        model.update(Msg::Event(Event::Paste("2500".into())));
        assert_eq!(model.amount_input().value(), "2500");

        press(&mut model, KeyCode::Tab);
        model.update(Msg::Event(Event::Paste("7.2".into())));
        assert_eq!(model.rate_input().value(), "7.2");
    }
}
