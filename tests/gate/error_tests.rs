// tests/gate/error_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use interval_gate::{CallRecord, ClockError, IntervalGate, IntervalGateConfig, IntervalGateError};

    fn gate(clock: &TestClock) -> IntervalGate<TestClock> {
        IntervalGate::with_config(IntervalGateConfig::default(), clock.clone()).unwrap()
    }

    #[test]
    fn empty_call_id_is_rejected() {
        let gate = gate(&TestClock::new(0));

        let result = gate.should_proceed("", "poll", None);
        assert!(matches!(
            result,
            Err(IntervalGateError::InvalidArgument("call_id"))
        ));
    }

    #[test]
    fn empty_function_id_is_rejected() {
        let gate = gate(&TestClock::new(0));

        let result = gate.should_proceed("order-1", "", Some(100));
        assert!(matches!(
            result,
            Err(IntervalGateError::InvalidArgument("function_id"))
        ));
    }

    #[test]
    fn both_empty_reports_call_id_first() {
        let gate = gate(&TestClock::new(0));

        let result = gate.check("", "", None);
        assert!(matches!(
            result,
            Err(IntervalGateError::InvalidArgument("call_id"))
        ));
    }

    #[test]
    fn invalid_arguments_never_touch_the_store() {
        let gate = gate(&TestClock::new(0));

        let _ = gate.should_proceed("", "poll", None);
        let _ = gate.should_proceed("order-1", "", None);
        let _ = gate.record_call("", CallRecord::new("poll", 1));
        assert_eq!(gate.call_count(), 0);
    }

    #[test]
    fn find_record_validates_identifiers() {
        let gate = gate(&TestClock::new(0));

        assert!(matches!(
            gate.find_record("", "poll"),
            Err(IntervalGateError::InvalidArgument("call_id"))
        ));
        assert!(matches!(
            gate.find_record("order-1", ""),
            Err(IntervalGateError::InvalidArgument("function_id"))
        ));
    }

    #[test]
    fn clock_error_propagates_in_should_proceed() {
        let clock = TestClock::new(0);
        let gate = gate(&clock);

        clock.fail_next_call();
        let result = gate.should_proceed("order-1", "poll", None);

        match result {
            Err(IntervalGateError::Clock(ClockError::SystemTimeError)) => {} // Expected
            other => panic!("Expected clock error, got: {:?}", other),
        }
        assert_eq!(gate.call_count(), 0);
    }

    #[test]
    fn clock_recovery_after_failure() {
        let clock = TestClock::new(1_000);
        let gate = gate(&clock);

        assert!(gate.should_proceed("order-1", "poll", None).unwrap());

        clock.fail_next_call();
        assert!(gate.should_proceed("order-1", "fetch", None).is_err());
        assert_eq!(gate.records("order-1").len(), 1);

        // Clock should work again automatically
        assert!(gate.should_proceed("order-1", "fetch", None).unwrap());
        assert_eq!(gate.records("order-1").len(), 2);
    }

    #[test]
    fn reset_failure_clears_pending_error() {
        let clock = TestClock::new(1_000);
        let gate = gate(&clock);

        clock.fail_next_call();
        clock.reset_failure();
        assert!(gate.should_proceed("order-1", "poll", None).unwrap());
    }

    #[test]
    fn error_display_formatting() {
        let err = IntervalGateError::InvalidArgument("function_id");
        assert_eq!(err.to_string(), "function_id is required and must not be empty");

        let err = IntervalGateError::InvalidInterval;
        assert!(err.to_string().contains("interval"));

        let err = IntervalGateError::from(ClockError::SystemTimeError);
        let message = err.to_string().to_lowercase();
        assert!(message.contains("clock") || message.contains("time"));
    }
}
