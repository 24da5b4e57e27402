//! Analysis session state machine.
//!
//! One request cycle at a time: Idle → Loading → Ready | Failed. A new
//! submission replaces the previous outcome wholesale, never merges.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::{AnalysisError, AnalysisResult};
use crate::report::AnalysisReport;

/// Anything that can turn a URL into an analysis report.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, url: &str) -> AnalysisResult<AnalysisReport>;
}

/// Observable session state.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        url: String,
    },
    Ready(AnalysisReport),
    Failed(AnalysisError),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading { .. })
    }

    /// The report, if the last cycle succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            SessionState::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// State container driving one analysis at a time.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    state: SessionState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &SessionState {
        &self.state
    }

    /// Mirror of the UI affordance: submit is enabled iff the URL is
    /// non-empty and no request is in flight.
    pub fn can_submit(&self, url: &str) -> bool {
        !url.trim().is_empty() && !self.state.is_loading()
    }

    /// Run one full request cycle against the analyzer.
    ///
    /// Guards first: an empty URL or an in-flight request is rejected
    /// without touching the analyzer. Failures land in
    /// [`SessionState::Failed`] and are also returned to the caller.
    ///
    /// Cancellation-safe: if the returned future is dropped mid-flight
    /// (e.g. the HTTP client disconnects), the pre-submit state is put
    /// back so the session does not stay Loading forever.
    pub async fn submit<A>(&mut self, analyzer: &A, url: &str) -> AnalysisResult<AnalysisReport>
    where
        A: Analyzer + ?Sized,
    {
        let url = url.trim();
        if url.is_empty() {
            return Err(AnalysisError::EmptyUrl);
        }
        if self.state.is_loading() {
            return Err(AnalysisError::Busy);
        }

        let prior = std::mem::replace(
            &mut self.state,
            SessionState::Loading {
                url: url.to_string(),
            },
        );
        let mut in_flight = InFlight {
            state: &mut self.state,
            prior: Some(prior),
        };
        debug!(%url, "analysis started");

        let outcome = analyzer.analyze(url).await;
        in_flight.prior = None;

        match outcome {
            Ok(report) => {
                *in_flight.state = SessionState::Ready(report.clone());
                debug!(%url, seo_score = report.seo_score, "analysis ready");
                Ok(report)
            }
            Err(err) => {
                error!(%url, %err, "analysis failed");
                *in_flight.state = SessionState::Failed(err.clone());
                Err(err)
            }
        }
    }
}

/// Restores the pre-submit state when a submit future is dropped before the
/// analyzer call finishes. Disarmed (`prior = None`) once the call completes.
struct InFlight<'a> {
    state: &'a mut SessionState,
    prior: Option<SessionState>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(prior) = self.prior.take() {
            debug!("analysis cancelled before completion");
            *self.state = prior;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct MockAnalyzer {
        calls: AtomicUsize,
        outcome: Result<AnalysisReport, AnalysisError>,
    }

    impl MockAnalyzer {
        fn ok(report: AnalysisReport) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Ok(report),
            }
        }

        fn err(err: AnalysisError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Err(err),
            }
        }
    }

    #[async_trait]
    impl Analyzer for MockAnalyzer {
        async fn analyze(&self, _url: &str) -> AnalysisResult<AnalysisReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// Analyzer whose call never resolves, for cancellation tests.
    struct PendingAnalyzer;

    #[async_trait]
    impl Analyzer for PendingAnalyzer {
        async fn analyze(&self, _url: &str) -> AnalysisResult<AnalysisReport> {
            std::future::pending().await
        }
    }

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            description: "x".to_string(),
            seo_score: 42,
            keywords: vec![("ai".to_string(), 3.0)],
            marketing_strategy: "y".to_string(),
            social_suggestions: vec![("facebook".to_string(), vec!["post1".to_string()])],
        }
    }

    #[tokio::test]
    async fn test_empty_url_makes_no_request() {
        let analyzer = MockAnalyzer::ok(sample_report());
        let mut session = AnalysisSession::new();

        let err = session.submit(&analyzer, "   ").await.unwrap_err();
        assert_eq!(err, AnalysisError::EmptyUrl);
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
        assert!(matches!(session.current(), SessionState::Idle));
    }

    #[tokio::test]
    async fn test_success_lands_in_ready() {
        let analyzer = MockAnalyzer::ok(sample_report());
        let mut session = AnalysisSession::new();

        let report = session.submit(&analyzer, "example.com").await.unwrap();
        assert_eq!(report.seo_score, 42);
        assert_eq!(session.current().report().unwrap().description, "x");
    }

    #[tokio::test]
    async fn test_failure_lands_in_failed() {
        let analyzer = MockAnalyzer::err(AnalysisError::schema("not json"));
        let mut session = AnalysisSession::new();

        let err = session.submit(&analyzer, "example.com").await.unwrap_err();
        assert_eq!(err.kind(), "schema_mismatch");
        assert!(matches!(session.current(), SessionState::Failed(_)));
        assert!(session.current().report().is_none());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_replaces_state() {
        let failing = MockAnalyzer::err(AnalysisError::Network("refused".to_string()));
        let ok = MockAnalyzer::ok(sample_report());
        let mut session = AnalysisSession::new();

        session.submit(&failing, "example.com").await.unwrap_err();
        session.submit(&ok, "example.com").await.unwrap();
        assert!(matches!(session.current(), SessionState::Ready(_)));
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_rejected() {
        let analyzer = MockAnalyzer::ok(sample_report());
        let mut session = AnalysisSession::new();
        session.state = SessionState::Loading {
            url: "example.com".to_string(),
        };

        let err = session.submit(&analyzer, "other.com").await.unwrap_err();
        assert_eq!(err, AnalysisError::Busy);
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dropped_submit_does_not_wedge_session() {
        let pending = PendingAnalyzer;
        let mut session = AnalysisSession::new();

        {
            let fut = session.submit(&pending, "example.com");
            let cancelled =
                tokio::time::timeout(std::time::Duration::from_millis(20), fut).await;
            assert!(cancelled.is_err());
        }

        // The cancelled cycle must not leave the session Loading
        assert!(!session.current().is_loading());

        let analyzer = MockAnalyzer::ok(sample_report());
        let report = session.submit(&analyzer, "example.com").await.unwrap();
        assert_eq!(report.seo_score, 42);
    }

    #[tokio::test]
    async fn test_dropped_submit_restores_prior_report() {
        let analyzer = MockAnalyzer::ok(sample_report());
        let mut session = AnalysisSession::new();
        session.submit(&analyzer, "example.com").await.unwrap();

        let pending = PendingAnalyzer;
        {
            let fut = session.submit(&pending, "other.com");
            let _ = tokio::time::timeout(std::time::Duration::from_millis(20), fut).await;
        }

        // The previous outcome is still visible after the cancellation
        assert_eq!(session.current().report().unwrap().description, "x");
    }

    #[test]
    fn test_can_submit_matches_button_affordance() {
        let mut session = AnalysisSession::new();
        assert!(!session.can_submit(""));
        assert!(!session.can_submit("  "));
        assert!(session.can_submit("example.com"));

        session.state = SessionState::Loading {
            url: "example.com".to_string(),
        };
        assert!(!session.can_submit("example.com"));

        session.state = SessionState::Failed(AnalysisError::EmptyUrl);
        assert!(session.can_submit("example.com"));
    }
}
