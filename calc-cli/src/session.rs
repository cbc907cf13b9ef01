//! Drives a [`Calculator`] from raw keys and notifies observers.
//!
//! The session is the only owner of its engine. After every key that maps
//! to an action, each subscribed observer receives the key and a fresh
//! [`DisplaySnapshot`], which is how front ends keep their view in sync.

use calc_core::{Calculator, DisplaySnapshot};
use tracing::debug;

use crate::keymap::{Key, KeyParseError, action_for, parse_keys};

type Observer = Box<dyn FnMut(&Key, &DisplaySnapshot)>;

pub struct Session {
    calculator: Calculator,
    observers: Vec<Observer>,
}

impl Session {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator,
            observers: Vec::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.calculator.snapshot()
    }

    /// Registers a callback run after every mapped key.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&Key, &DisplaySnapshot) + 'static,
    ) {
        self.observers.push(Box::new(observer));
    }

    /// Applies one key. Returns `false` when the key is unbound.
    pub fn press(
        &mut self,
        key: Key,
    ) -> bool {
        let Some(action) = action_for(key) else {
            return false;
        };

        self.calculator.apply(action);
        debug!(%key, ?action, display = self.calculator.display(), "key applied");

        if !self.observers.is_empty() {
            let snapshot = self.calculator.snapshot();
            for observer in &mut self.observers {
                observer(&key, &snapshot);
            }
        }
        true
    }

    /// Presses every key of `line` and returns the resulting displays.
    ///
    /// The line is parsed before any key is applied, so a malformed line
    /// leaves the calculator untouched.
    pub fn feed(
        &mut self,
        line: &str,
    ) -> Result<DisplaySnapshot, KeyParseError> {
        let keys = parse_keys(line)?;
        for key in keys {
            self.press(key);
        }
        Ok(self.snapshot())
    }
}

/// Renders the operator line above the display line, both right-aligned.
///
/// The frame widens to fit the display when `width` is too narrow.
pub fn render(
    snapshot: &DisplaySnapshot,
    width: usize,
) -> String {
    let width = width.max(snapshot.display.chars().count());
    format!(
        "{:>width$}\n{:>width$}",
        snapshot.operator, snapshot.display
    )
}

/// Plain output for a one-shot run: the operator line when an operator is
/// pending, then the display. No padding.
pub fn render_plain(snapshot: &DisplaySnapshot) -> String {
    if snapshot.operator.is_empty() {
        snapshot.display.clone()
    } else {
        format!("{}\n{}", snapshot.operator, snapshot.display)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use calc_core::CalculatorConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> Session {
        Session::new(Calculator::default())
    }

    // =========================================================================
    // press / feed tests
    // =========================================================================

    #[test]
    fn feed_returns_final_snapshot() {
        let mut session = session();

        let snapshot = session.feed("3+4+5=").unwrap();

        assert_eq!(snapshot.display, "12");
        assert_eq!(snapshot.operator, "");
        assert!(!snapshot.error);
    }

    #[test]
    fn feed_keeps_state_between_lines() {
        let mut session = session();

        session.feed("7+").unwrap();
        let snapshot = session.feed("2<bs>9<enter>").unwrap();

        assert_eq!(snapshot.display, "16");
    }

    #[test]
    fn feed_rejects_malformed_line_without_side_effects() {
        let mut session = session();
        session.feed("12").unwrap();

        let result = session.feed("3<oops>");

        assert!(result.is_err());
        assert_eq!(session.calculator().display(), "12");
    }

    #[test]
    fn press_reports_unbound_keys() {
        let mut session = session();

        assert!(session.press(Key::Char('5')));
        assert!(!session.press(Key::Char('?')));
        assert_eq!(session.calculator().display(), "5");
    }

    #[test]
    fn error_clears_only_on_reset_key() {
        let mut session = session();

        let snapshot = session.feed("5/0=1").unwrap();
        assert_eq!(snapshot.display, "Error");
        assert!(snapshot.error);

        let snapshot = session.feed("r").unwrap();
        assert_eq!(snapshot.display, "0");
        assert!(!snapshot.error);
    }

    #[test]
    fn session_uses_engine_configuration() {
        let calculator = Calculator::new(CalculatorConfig {
            max_input_digits: 3,
            max_result_decimals: 1,
        })
        .unwrap();
        let mut session = Session::new(calculator);

        let snapshot = session.feed("98765").unwrap();

        assert_eq!(snapshot.display, "987");
    }

    // =========================================================================
    // observer tests
    // =========================================================================

    #[test]
    fn observers_see_every_mapped_key() {
        let mut session = session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |key, snapshot| {
            sink.borrow_mut()
                .push((key.to_string(), snapshot.display.clone(), snapshot.operator.clone()));
        });

        session.feed("3 ? + 4 <enter>").unwrap();

        let expected = [("3", "3", ""), ("+", "3", "+"), ("4", "4", "+"), ("<enter>", "7", "")]
            .map(|(k, d, o)| (k.to_string(), d.to_string(), o.to_string()));
        assert_eq!(*seen.borrow(), expected.to_vec());
    }

    #[test]
    fn every_observer_is_notified() {
        let mut session = session();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..2 {
            let count = Rc::clone(&count);
            session.subscribe(move |_, _| *count.borrow_mut() += 1);
        }

        session.feed("12").unwrap();

        assert_eq!(*count.borrow(), 4);
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_right_aligns_both_lines() {
        let snapshot = DisplaySnapshot {
            display: "42".to_string(),
            operator: "×".to_string(),
            error: false,
        };

        assert_eq!(render(&snapshot, 6), "     ×\n    42");
    }

    #[test]
    fn render_widens_for_long_display() {
        let snapshot = DisplaySnapshot {
            display: "-123.45".to_string(),
            operator: String::new(),
            error: false,
        };

        assert_eq!(render(&snapshot, 4), "       \n-123.45");
    }

    #[test]
    fn render_plain_prints_display_alone_without_operator() {
        let mut session = session();

        let snapshot = session.feed("3+4+5=").unwrap();

        assert_eq!(render_plain(&snapshot), "12");
    }

    #[test]
    fn render_plain_prints_pending_operator_above_display() {
        let mut session = session();

        let snapshot = session.feed("12*").unwrap();

        assert_eq!(render_plain(&snapshot), "×\n12");
    }

    #[test]
    fn render_plain_shows_error_text() {
        let mut session = session();

        let snapshot = session.feed("5/0=").unwrap();

        assert_eq!(render_plain(&snapshot), "Error");
    }
}
