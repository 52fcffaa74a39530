//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use deskcalc::core::{BinaryOp, HISTORY_CAPACITY};
use deskcalc::{Engine, Event, UnaryFn};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(digit in 0..10u8) -> Event {
        Event::Digit(digit)
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..5u8) -> Event {
        Event::Operator(match variant {
            0 => BinaryOp::Add,
            1 => BinaryOp::Sub,
            2 => BinaryOp::Mul,
            3 => BinaryOp::Div,
            _ => BinaryOp::Mod,
        })
    }
}

prop_compose! {
    fn arbitrary_function()(variant in 0..20u8) -> Event {
        Event::Function(match variant {
            0 => UnaryFn::Pi,
            1 => UnaryFn::Tau,
            2 => UnaryFn::E,
            3 => UnaryFn::Sin,
            4 => UnaryFn::Cos,
            5 => UnaryFn::Tan,
            6 => UnaryFn::Sinh,
            7 => UnaryFn::Cosh,
            8 => UnaryFn::Tanh,
            9 => UnaryFn::Log,
            10 => UnaryFn::Log10,
            11 => UnaryFn::Log2,
            12 => UnaryFn::Log1p,
            13 => UnaryFn::Exp,
            14 => UnaryFn::Expm1,
            15 => UnaryFn::Lgamma,
            16 => UnaryFn::Acosh,
            17 => UnaryFn::Asinh,
            18 => UnaryFn::Degrees,
            _ => UnaryFn::Sqrt,
        })
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => arbitrary_digit(),
        1 => Just(Event::Dot),
        2 => arbitrary_operator(),
        2 => Just(Event::Equals),
        1 => Just(Event::ClearEntry),
        1 => Just(Event::AllClear),
        1 => Just(Event::Negate),
        2 => arbitrary_function(),
    ]
}

proptest! {
    /// Typed digits and dots show up verbatim, with at most one dot kept.
    #[test]
    fn typed_entry_is_the_literal_keystrokes(
        first in 1..10u8,
        rest in prop::collection::vec(prop_oneof![
            (0..10u8).prop_map(Some),
            Just(None), // a dot
        ], 0..8)
    ) {
        let mut engine = Engine::new();
        let mut expected = first.to_string();
        let mut render = engine.apply(Event::Digit(first));

        let mut has_dot = false;
        for keystroke in rest {
            match keystroke {
                Some(digit) => {
                    render = engine.apply(Event::Digit(digit));
                    expected.push(char::from(b'0' + digit));
                }
                None => {
                    render = engine.apply(Event::Dot);
                    if !has_dot {
                        expected.push('.');
                        has_dot = true;
                    }
                }
            }
        }

        prop_assert_eq!(render.display, expected);
    }

    /// The display never holds more than one decimal point.
    #[test]
    fn display_never_has_two_dots(events in prop::collection::vec(arbitrary_event(), 0..60)) {
        let mut engine = Engine::new();
        for event in events {
            let render = engine.apply(event);
            let dots = render.display.matches('.').count();
            prop_assert!(dots <= 1, "display {:?} has {} dots", render.display, dots);
        }
    }

    /// No event sequence panics, and every event yields a render directive
    /// with a non-empty display and a bounded history.
    #[test]
    fn engine_always_renders(events in prop::collection::vec(arbitrary_event(), 0..100)) {
        let mut engine = Engine::new();
        for event in events {
            let render = engine.apply(event);
            prop_assert!(!render.display.is_empty());
            prop_assert!(render.history.len() <= HISTORY_CAPACITY);
            prop_assert_eq!(render.history.len(), engine.history().len());
        }
    }

    /// Repeated `=` with nothing pending keeps re-displaying the same
    /// accumulator and records nothing.
    #[test]
    fn equals_is_idempotent_when_nothing_pending(
        events in prop::collection::vec(arbitrary_event(), 0..40),
        presses in 1..5usize
    ) {
        let mut engine = Engine::new();
        for event in events {
            engine.apply(event);
        }

        // The first press resolves (or faults) whatever was pending; from
        // then on nothing is armed and `=` must be a pure re-display.
        engine.apply(Event::Equals);
        let baseline = engine.apply(Event::Equals);
        let recorded = engine.history().len();
        for _ in 0..presses {
            let again = engine.apply(Event::Equals);
            prop_assert_eq!(&again.display, &baseline.display);
            prop_assert_eq!(engine.history().len(), recorded);
        }
    }

    /// All-clear always resets the machine but never the history.
    #[test]
    fn all_clear_resets_state_not_history(
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let mut engine = Engine::new();
        for event in events {
            engine.apply(event);
        }
        let history_before = engine.history().rendered_lines();

        let render = engine.apply(Event::AllClear);
        prop_assert_eq!(render.display, "0");
        prop_assert_eq!(engine.state().accumulator(), 0.0);
        prop_assert_eq!(engine.state().pending_op(), None);
        prop_assert_eq!(render.history, history_before);
    }

    /// Resolving n additions keeps exactly the last five records, oldest
    /// evicted first.
    #[test]
    fn history_is_a_bounded_fifo(resolutions in 0..12usize) {
        let mut engine = Engine::new();
        for i in 0..resolutions {
            let digit = (i % 10) as u8;
            engine.apply(Event::AllClear);
            engine.apply(Event::Digit(digit));
            engine.apply(Event::Operator(BinaryOp::Add));
            engine.apply(Event::Digit(1));
            engine.apply(Event::Equals);
        }

        let lines = engine.history().rendered_lines();
        prop_assert_eq!(lines.len(), resolutions.min(HISTORY_CAPACITY));

        let skipped = resolutions.saturating_sub(HISTORY_CAPACITY);
        for (offset, line) in lines.iter().enumerate() {
            let i = skipped + offset;
            let lhs = i % 10;
            prop_assert_eq!(line.clone(), format!("{} + 1 = {}", lhs, lhs + 1));
        }
    }

    /// Dividing by zero is never fatal and never disturbs the history.
    #[test]
    fn divide_by_zero_is_locally_recoverable(
        lhs in 1..10u8,
        use_modulo in any::<bool>()
    ) {
        let mut engine = Engine::new();
        engine.apply(Event::Digit(lhs));
        let op = if use_modulo { BinaryOp::Mod } else { BinaryOp::Div };
        engine.apply(Event::Operator(op));
        engine.apply(Event::Digit(0));
        let render = engine.apply(Event::Equals);

        prop_assert_eq!(render.display, "Divide by 0");
        prop_assert_eq!(engine.state().accumulator(), f64::from(lhs));
        prop_assert!(render.history.is_empty());

        // A fresh entry fully recovers.
        let render = engine.apply(Event::Digit(3));
        prop_assert_eq!(render.display, "3");
    }

    /// Digit-and-arithmetic sessions produce a state that serde
    /// round-trips exactly.
    #[test]
    fn state_round_trips_through_serde(
        events in prop::collection::vec(prop_oneof![
            4 => arbitrary_digit(),
            1 => Just(Event::Dot),
            2 => arbitrary_operator(),
            2 => Just(Event::Equals),
            1 => Just(Event::ClearEntry),
        ], 0..40)
    ) {
        let mut engine = Engine::new();
        for event in events {
            engine.apply(event);
        }

        let state_json = serde_json::to_string(engine.state()).unwrap();
        let state: deskcalc::EngineState = serde_json::from_str(&state_json).unwrap();
        prop_assert_eq!(&state, engine.state());

        let history_json = serde_json::to_string(engine.history()).unwrap();
        let history: deskcalc::History = serde_json::from_str(&history_json).unwrap();
        prop_assert_eq!(&history, engine.history());
    }
}
