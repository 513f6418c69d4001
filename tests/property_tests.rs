//! Property-based tests for the calculation engine and session state.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use reckon::engine::{arithmetic, scientific, statistics, BinaryOp, StatValue, Statistic};
use reckon::session::{MemoryCommand, Request, Session, SessionSnapshot};
use reckon::state::{Guard, HistoryLog, MemoryRegister, SessionMode, HISTORY_CAPACITY};

fn operand() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

prop_compose! {
    fn arbitrary_mode()(scientific in any::<bool>(), stopped in any::<bool>()) -> SessionMode {
        let mut mode = SessionMode::new(scientific);
        if stopped {
            mode.stop();
        }
        mode
    }
}

proptest! {
    #[test]
    fn division_inverts_multiplication(a in operand(), b in operand()) {
        prop_assume!(b.abs() > 1e-3);
        let quotient = arithmetic::divide(a, b).unwrap();
        prop_assert!((quotient * b - a).abs() <= 1e-6 * a.abs().max(1.0));
    }

    #[test]
    fn near_zero_divisor_is_always_rejected(a in operand(), b in -1e-11..1e-11f64) {
        prop_assert!(arithmetic::divide(a, b).is_err());
    }

    #[test]
    fn history_never_exceeds_capacity(entries in prop::collection::vec("[a-z]{1,8}", 0..120)) {
        let mut history = HistoryLog::new();
        for entry in &entries {
            history.record(entry.as_str());
        }

        prop_assert!(history.count() <= HISTORY_CAPACITY);

        let expected: Vec<&String> = entries
            .iter()
            .skip(entries.len().saturating_sub(HISTORY_CAPACITY))
            .collect();
        let kept: Vec<String> = history.all().into_iter().map(|r| r.text).collect();
        prop_assert_eq!(kept.len(), expected.len());
        for (kept, expected) in kept.iter().zip(expected) {
            prop_assert_eq!(kept, expected);
        }
    }

    #[test]
    fn recent_history_is_a_suffix(
        entries in prop::collection::vec("[a-z]{1,8}", 0..60),
        n in 0usize..70,
    ) {
        let mut history = HistoryLog::new();
        for entry in &entries {
            history.record(entry.as_str());
        }

        let all = history.all();
        let recent = history.last(n);
        prop_assert_eq!(recent.len(), n.min(all.len()));
        prop_assert_eq!(&all[all.len() - recent.len()..], &recent[..]);
    }

    #[test]
    fn mode_is_sorted_and_drawn_from_input(
        numbers in prop::collection::vec(-5i32..5, 1..30)
    ) {
        let numbers: Vec<f64> = numbers.into_iter().map(f64::from).collect();
        let modes = statistics::mode(&numbers).unwrap();

        prop_assert!(!modes.is_empty());
        prop_assert!(modes.windows(2).all(|w| w[0] < w[1]));
        for value in &modes {
            prop_assert!(numbers.contains(value));
        }

        let count = |v: f64| numbers.iter().filter(|n| **n == v).count();
        let top = count(modes[0]);
        prop_assert!(modes.iter().all(|m| count(*m) == top));
        prop_assert!(numbers.iter().all(|n| count(*n) <= top));
    }

    #[test]
    fn central_tendency_stays_within_bounds(
        numbers in prop::collection::vec(operand(), 1..40)
    ) {
        let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let slack = 1e-6;

        let mean = statistics::mean(&numbers).unwrap();
        prop_assert!(mean >= min - slack && mean <= max + slack);

        let median = statistics::median(&numbers).unwrap();
        prop_assert!(median >= min && median <= max);
    }

    #[test]
    fn standard_deviation_is_non_negative(
        numbers in prop::collection::vec(operand(), 1..40)
    ) {
        let sd = statistics::standard_deviation(&numbers).unwrap();
        prop_assert!(sd >= 0.0);
        prop_assert!(sd.is_finite());
    }

    #[test]
    fn memory_accumulate_round_trips(start in operand(), delta in operand()) {
        let mut memory = MemoryRegister::new();
        memory.store(start);
        memory.accumulate(delta);
        memory.deaccumulate(delta);
        prop_assert!((memory.recall() - start).abs() <= 1e-6);
    }

    #[test]
    fn guard_is_deterministic(mode in arbitrary_mode()) {
        let guard = Guard::new(|m: &SessionMode| m.is_scientific());
        let result1 = guard.check(&mode);
        let result2 = guard.check(&mode);
        prop_assert_eq!(result1, result2);
    }

    #[test]
    fn factorial_matches_running_product(n in 0i64..=20) {
        let expected: i64 = (1..=n).product();
        prop_assert_eq!(scientific::factorial(n).unwrap(), expected);
    }

    #[test]
    fn factorial_rejects_out_of_range(n in prop_oneof![i64::MIN..0, 21i64..i64::MAX]) {
        prop_assert!(scientific::factorial(n).is_err());
    }

    #[test]
    fn failed_requests_leave_history_untouched(a in operand(), count in 0usize..5) {
        let mut session = Session::default();
        for _ in 0..count {
            session
                .execute(Request::Binary { op: BinaryOp::Add, lhs: a, rhs: 1.0 })
                .unwrap();
        }

        let result = session.execute(Request::Binary { op: BinaryOp::Divide, lhs: a, rhs: 0.0 });
        prop_assert!(result.is_err());
        prop_assert_eq!(session.history_len(), count);
    }

    #[test]
    fn statistic_request_matches_engine(
        numbers in prop::collection::vec(operand(), 1..20)
    ) {
        let mut session = Session::default();
        let outcome = session
            .execute(Request::Statistic { op: Statistic::Mean, numbers: numbers.clone() })
            .unwrap();

        let expected = statistics::mean(&numbers).unwrap();
        prop_assert_eq!(outcome.value(), Some(expected));
        prop_assert_eq!(Statistic::Mean.apply(&numbers).unwrap(), StatValue::Single(expected));
    }

    #[test]
    fn snapshot_roundtrip_serialization(values in prop::collection::vec(operand(), 0..5)) {
        let mut session = Session::new(true);
        for value in &values {
            session.memory(MemoryCommand::Add(*value)).unwrap();
        }

        let snapshot = session.snapshot();
        let json = snapshot.to_json().unwrap();
        let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.scientific, snapshot.scientific);
        prop_assert_eq!(deserialized.history.len(), snapshot.history.len());
        prop_assert!((deserialized.memory - snapshot.memory).abs() <= 1e-9 * snapshot.memory.abs().max(1.0));
    }
}
