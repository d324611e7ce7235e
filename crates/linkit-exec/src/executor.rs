//! The retrying executor.

use serde_json::Value;
use tracing::{debug, warn};

use linkit_core::{CommandResult, ErrorDescriptor};

use crate::error::{ExecError, Result};
use crate::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::transport::Transport;

/// Flag appended to every invocation to request a JSON envelope.
pub const JSON_FLAG: &str = "--json";

/// Runs operations one at a time, blocking through retries.
#[derive(Debug)]
pub struct Executor<T, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self::with_sleeper(transport, ThreadSleeper, policy)
    }
}

impl<T: Transport, S: Sleeper> Executor<T, S> {
    pub fn with_sleeper(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Run one operation.
    ///
    /// `args` are the operation arguments; [`JSON_FLAG`] is appended. With
    /// `retry` set, transient failures are retried up to the policy's
    /// budget, sleeping `base_delay * (attempt + 1)` in between.
    ///
    /// # Errors
    ///
    /// [`ExecError::MalformedResponse`] and terminal
    /// [`ExecError::Operation`] errors are returned from the attempt that
    /// produced them. Transient failures that exhaust the budget become
    /// [`ExecError::RetriesExhausted`]; without retry the single failure
    /// is returned as-is.
    pub fn execute(&self, args: &[String], retry: bool) -> Result<CommandResult> {
        let mut full_args = args.to_vec();
        full_args.push(JSON_FLAG.to_string());

        let max_attempts = self.policy.max_attempts(retry);
        let mut attempt = 0;
        loop {
            debug!(attempt = attempt + 1, max_attempts, args = ?full_args, "executing");
            let err = match self.attempt(&full_args) {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => e,
            };

            attempt += 1;
            if attempt >= max_attempts {
                if max_attempts == 1 {
                    return Err(err);
                }
                return Err(ExecError::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(err),
                });
            }

            let delay = self.policy.delay_for(attempt - 1);
            warn!(
                attempt,
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "transient failure, retrying"
            );
            self.sleeper.sleep(delay);
        }
    }

    fn attempt(&self, args: &[String]) -> Result<CommandResult> {
        let stdout = self.transport.run(args)?;

        let value: Value = match serde_json::from_str(&stdout) {
            Ok(v) => v,
            Err(e) => return Err(malformed(e.to_string(), stdout)),
        };
        let result = match CommandResult::from_value(value) {
            Ok(r) => r,
            Err(e) => return Err(malformed(e.to_string(), stdout)),
        };

        if result.success {
            return Ok(result);
        }
        let ErrorDescriptor { code, message } = result.error.unwrap_or_default();
        Err(ExecError::Operation { code, message })
    }
}

fn malformed(reason: String, output: String) -> ExecError {
    ExecError::MalformedResponse { reason, output }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::transport::TransportError;
    use linkit_core::ErrorCode;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays canned outputs and records every argument list it receives.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        responses: RefCell<VecDeque<std::result::Result<String, TransportError>>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeTransport {
        pub(crate) fn new(outputs: &[&str]) -> Self {
            let fake = Self::default();
            for out in outputs {
                fake.push_ok(out);
            }
            fake
        }

        pub(crate) fn push_ok(&self, output: &str) {
            self.responses.borrow_mut().push_back(Ok(output.to_string()));
        }

        pub(crate) fn push_spawn_error(&self) {
            self.responses.borrow_mut().push_back(Err(TransportError::Spawn {
                program: "linear".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }));
        }

        pub(crate) fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl Transport for FakeTransport {
        fn run(&self, args: &[String]) -> std::result::Result<String, TransportError> {
            self.calls.borrow_mut().push(args.to_vec());
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected extra invocation")
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingSleeper {
        slept: RefCell<Vec<Duration>>,
    }

    impl RecordingSleeper {
        pub(crate) fn slept(&self) -> Vec<Duration> {
            self.slept.borrow().clone()
        }
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    const RATE_LIMITED: &str =
        r#"{"success": false, "error": {"code": "RATE_LIMITED", "message": "Too many requests"}}"#;

    pub(crate) fn executor(fake: FakeTransport) -> Executor<FakeTransport, RecordingSleeper> {
        Executor::with_sleeper(
            fake,
            RecordingSleeper::default(),
            RetryPolicy::new(3, Duration::from_millis(10)),
        )
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn success_appends_json_flag() {
        let exec = executor(FakeTransport::new(&[r#"{"success": true, "issue": {"identifier": "ENG-123"}}"#]));
        let result = exec.execute(&args(&["issue", "view", "ENG-123"]), true).unwrap();
        assert_eq!(result.issue_identifier(), Some("ENG-123"));
        assert_eq!(exec.transport().calls(), vec![args(&["issue", "view", "ENG-123", "--json"])]);
        assert!(exec.sleeper().slept().is_empty());
    }

    #[test]
    fn missing_success_field_is_success() {
        let exec = executor(FakeTransport::new(&[r#"{"issues": [{"identifier": "ENG-1"}]}"#]));
        let result = exec.execute(&args(&["issue", "list"]), true).unwrap();
        assert!(result.success);
        assert_eq!(exec.transport().calls().len(), 1);
    }

    #[test]
    fn terminal_error_is_not_retried() {
        let exec = executor(FakeTransport::new(&[
            r#"{"success": false, "error": {"code": "NOT_FOUND", "message": "Issue ENG-9 not found"}}"#,
        ]));
        let err = exec.execute(&args(&["issue", "view", "ENG-9"]), true).unwrap_err();
        assert_eq!(exec.transport().calls().len(), 1);
        assert!(exec.sleeper().slept().is_empty());
        assert_eq!(err.code(), Some(&ErrorCode::NotFound));
        assert_eq!(err.api_message(), Some("Issue ENG-9 not found"));
        assert!(matches!(err, ExecError::Operation { .. }));
    }

    #[test]
    fn every_terminal_code_stops_immediately() {
        for code in ["INVALID_VALUE", "MISSING_REQUIRED_FIELD"] {
            let out = format!(r#"{{"success": false, "error": {{"code": "{code}", "message": "bad"}}}}"#);
            let exec = executor(FakeTransport::new(&[out.as_str()]));
            let err = exec.execute(&args(&["issue", "create"]), true).unwrap_err();
            assert_eq!(exec.transport().calls().len(), 1, "{code}");
            assert_eq!(err.code().map(ErrorCode::as_str), Some(code));
        }
    }

    #[test]
    fn transient_error_uses_full_budget_with_increasing_delays() {
        let exec = executor(FakeTransport::new(&[RATE_LIMITED, RATE_LIMITED, RATE_LIMITED]));
        let err = exec.execute(&args(&["issue", "list"]), true).unwrap_err();

        assert_eq!(exec.transport().calls().len(), 3);
        assert_eq!(
            exec.sleeper().slept(),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        match &err {
            ExecError::RetriesExhausted { attempts, .. } => assert_eq!(*attempts, 3),
            other => panic!("expected RetriesExhausted, got: {other:?}"),
        }
        assert_eq!(err.code().map(ErrorCode::as_str), Some("RATE_LIMITED"));
        assert_eq!(err.api_message(), Some("Too many requests"));
        assert!(err.to_string().contains("maximum retries exceeded"));
    }

    #[test]
    fn transient_error_then_success() {
        let exec = executor(FakeTransport::new(&[RATE_LIMITED, r#"{"success": true}"#]));
        let result = exec.execute(&args(&["issue", "list"]), true).unwrap();
        assert!(result.success);
        assert_eq!(exec.transport().calls().len(), 2);
        assert_eq!(exec.sleeper().slept(), vec![Duration::from_millis(10)]);
    }

    #[test]
    fn retry_disabled_makes_one_attempt() {
        let exec = executor(FakeTransport::new(&[RATE_LIMITED]));
        let err = exec.execute(&args(&["issue", "list"]), false).unwrap_err();
        assert_eq!(exec.transport().calls().len(), 1);
        assert!(exec.sleeper().slept().is_empty());
        assert!(matches!(err, ExecError::Operation { .. }));
    }

    #[test]
    fn malformed_output_is_not_retried() {
        let exec = executor(FakeTransport::new(&["Error: not logged in"]));
        let err = exec.execute(&args(&["issue", "list"]), true).unwrap_err();
        assert_eq!(exec.transport().calls().len(), 1);
        match err {
            ExecError::MalformedResponse { output, .. } => assert_eq!(output, "Error: not logged in"),
            other => panic!("expected MalformedResponse, got: {other:?}"),
        }
    }

    #[test]
    fn non_object_json_is_malformed() {
        let exec = executor(FakeTransport::new(&["[1, 2, 3]"]));
        let err = exec.execute(&args(&["issue", "list"]), true).unwrap_err();
        assert!(matches!(err, ExecError::MalformedResponse { .. }));
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn transport_failure_is_retried() {
        let fake = FakeTransport::default();
        fake.push_spawn_error();
        fake.push_ok(r#"{"success": true}"#);
        let exec = executor(fake);
        assert!(exec.execute(&args(&["issue", "list"]), true).is_ok());
        assert_eq!(exec.transport().calls().len(), 2);
        assert_eq!(exec.sleeper().slept(), vec![Duration::from_millis(10)]);
    }

    #[test]
    fn transport_failure_exhausts_budget() {
        let fake = FakeTransport::default();
        for _ in 0..3 {
            fake.push_spawn_error();
        }
        let exec = executor(fake);
        let err = exec.execute(&args(&["issue", "list"]), true).unwrap_err();
        assert_eq!(exec.transport().calls().len(), 3);
        match err {
            ExecError::RetriesExhausted { last, .. } => {
                assert!(matches!(*last, ExecError::Transport(_)));
            }
            other => panic!("expected RetriesExhausted, got: {other:?}"),
        }
    }

    #[test]
    fn transport_failure_without_retry() {
        let fake = FakeTransport::default();
        fake.push_spawn_error();
        let exec = executor(fake);
        let err = exec.execute(&args(&["issue", "list"]), false).unwrap_err();
        assert!(matches!(err, ExecError::Transport(_)));
        assert_eq!(exec.transport().calls().len(), 1);
    }

    #[test]
    fn failure_without_code_is_transient() {
        let exec = executor(FakeTransport::new(&[r#"{"success": false}"#, r#"{"success": true}"#]));
        assert!(exec.execute(&args(&["issue", "list"]), true).is_ok());
        assert_eq!(exec.transport().calls().len(), 2);
    }
}
