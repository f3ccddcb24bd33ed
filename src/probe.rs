//! Bounded readiness polling.
//!
//! A fixed-interval retry loop, deliberately without backoff or jitter:
//! the wait is short, bounded, and against a local port. 401 counts as
//! ready because it proves the service is alive and guarding access.

use crate::error::{Error, Result};
use log::debug;
use std::thread;
use std::time::Duration;
use ureq::Agent;

/// Attempt ceiling for the default check (60 x 5s, about five minutes).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Fixed pause between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Statuses that prove the service is up.
pub const DEFAULT_ACCEPTED: &[u16] = &[200, 302, 401];

/// What a single probe attempt observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The target answered with this HTTP status.
    Status(u16),
    /// Connection failed: refused, reset, timeout, DNS.
    Unreachable(String),
}

/// One bounded readiness poll against a URL.
#[derive(Debug, Clone)]
pub struct ReadinessCheck {
    pub url: String,
    pub max_attempts: u32,
    pub interval: Duration,
    pub accepted: Vec<u16>,
}

impl ReadinessCheck {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
            accepted: DEFAULT_ACCEPTED.to_vec(),
        }
    }

    pub fn with_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_accepted(mut self, accepted: &[u16]) -> Self {
        self.accepted = accepted.to_vec();
        self
    }

    /// Poll over HTTP until an accepted status or the attempt ceiling.
    /// Returns the number of attempts used.
    pub fn wait(&self) -> Result<u32> {
        let agent = probe_agent();
        self.wait_with(|url| http_probe(&agent, url))
    }

    /// The same loop with an injected probe, so tests never open sockets.
    pub fn wait_with<F>(&self, mut probe: F) -> Result<u32>
    where
        F: FnMut(&str) -> Probe,
    {
        for attempt in 1..=self.max_attempts {
            match probe(&self.url) {
                Probe::Status(code) if self.accepted.contains(&code) => {
                    debug!("{} answered {} on attempt {}", self.url, code, attempt);
                    return Ok(attempt);
                }
                Probe::Status(code) => {
                    debug!("attempt {}/{}: status {}", attempt, self.max_attempts, code);
                }
                Probe::Unreachable(reason) => {
                    debug!("attempt {}/{}: {}", attempt, self.max_attempts, reason);
                }
            }
            if attempt < self.max_attempts {
                thread::sleep(self.interval);
            }
        }

        Err(Error::ReadinessTimeout {
            url: self.url.clone(),
            attempts: self.max_attempts,
        })
    }
}

/// Agent that reports statuses as-is: redirects are not followed (302
/// is a readiness signal, not something to chase) and HTTP error
/// statuses are observations, not transport errors.
fn probe_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .max_redirects(0)
        .max_redirects_will_error(false)
        .timeout_global(Some(Duration::from_secs(10)))
        .build()
        .into()
}

fn http_probe(agent: &Agent, url: &str) -> Probe {
    match agent.get(url).call() {
        Ok(response) => Probe::Status(response.status().as_u16()),
        Err(e) => Probe::Unreachable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Instant;

    fn fast_check() -> ReadinessCheck {
        ReadinessCheck::new("http://127.0.0.1:5678").with_interval(Duration::from_millis(1))
    }

    /// Probe that replays a fixed sequence of observations.
    fn scripted(script: Vec<Probe>) -> impl FnMut(&str) -> Probe {
        let mut script = script.into_iter();
        move |_| script.next().expect("probe called past end of script")
    }

    #[test]
    fn test_ready_on_third_probe_uses_three_attempts() {
        let start = Instant::now();
        let attempts = fast_check()
            .wait_with(scripted(vec![
                Probe::Unreachable("connection refused".into()),
                Probe::Unreachable("connection refused".into()),
                Probe::Status(200),
            ]))
            .unwrap();
        assert_eq!(attempts, 3);
        // Two sleeps happened, one per failed attempt.
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_never_ready_exhausts_exact_ceiling() {
        let count = Cell::new(0u32);
        let check = ReadinessCheck::new("http://127.0.0.1:5678").with_interval(Duration::ZERO);
        let err = check
            .wait_with(|_| {
                count.set(count.get() + 1);
                Probe::Status(500)
            })
            .unwrap_err();

        assert_eq!(count.get(), DEFAULT_MAX_ATTEMPTS);
        match err {
            Error::ReadinessTimeout { attempts, .. } => assert_eq!(attempts, 60),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized_counts_as_ready() {
        let attempts = fast_check()
            .wait_with(scripted(vec![Probe::Status(401)]))
            .unwrap();
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_redirect_counts_as_ready() {
        let attempts = fast_check()
            .wait_with(scripted(vec![Probe::Status(302)]))
            .unwrap();
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_server_error_is_retried() {
        let attempts = fast_check()
            .wait_with(scripted(vec![
                Probe::Status(500),
                Probe::Status(502),
                Probe::Status(200),
            ]))
            .unwrap();
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_connection_refused_is_retried() {
        let attempts = fast_check()
            .wait_with(scripted(vec![
                Probe::Unreachable("connection refused".into()),
                Probe::Status(200),
            ]))
            .unwrap();
        assert_eq!(attempts, 2);
    }

    #[test]
    fn test_custom_accepted_set() {
        let check = fast_check().with_accepted(&[200, 301, 302, 401]);
        let attempts = check
            .wait_with(scripted(vec![Probe::Status(301)]))
            .unwrap();
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_custom_attempt_ceiling() {
        let count = Cell::new(0u32);
        let check = fast_check().with_attempts(6).with_interval(Duration::ZERO);
        let result = check.wait_with(|_| {
            count.set(count.get() + 1);
            Probe::Unreachable("no route to host".into())
        });
        assert!(result.is_err());
        assert_eq!(count.get(), 6);
    }
}
