//! Theater owner dashboard.
//!
//! The dashboard needs two reads: the counters and the revenue per screen.
//! Both are issued together and the dashboard renders only when both
//! succeed.

use cinepass_api::ClassifiedError;
use cinepass_api::types::{CountStats, RevenueReport};
use cinepass_session::actions::{TheaterRequest, TheaterResponse};
use cinepass_session::providers::TheaterGateway;
use cinepass_session::{DispatchError, TheaterStore, dispatch};
use std::time::Duration;

/// Everything the dashboard page draws
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    /// Counters
    pub counts: CountStats,
    /// Revenue per screen
    pub revenue: RevenueReport,
}

impl Dashboard {
    /// Sum of all screens
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.revenue.iter().map(|screen| screen.revenue).sum()
    }
}

/// Fetch counters and revenue concurrently.
///
/// # Errors
///
/// Returns the first failure of either call. A 401/403 has already signed
/// the theater session out by the time this returns.
#[tracing::instrument(skip(store))]
pub async fn load_dashboard<G>(
    store: &TheaterStore<G>,
    timeout: Duration,
) -> Result<Dashboard, DispatchError>
where
    G: TheaterGateway + Clone + 'static,
{
    let (counts, revenue) = futures::future::try_join(
        dispatch(store, TheaterRequest::GetCountStats, timeout),
        dispatch(store, TheaterRequest::GetRevenueByScreen, timeout),
    )
    .await?;

    let counts = match counts {
        TheaterResponse::GetCountStats(envelope) => envelope.data.unwrap_or_default(),
        other => return Err(unexpected(&other)),
    };
    let revenue = match revenue {
        TheaterResponse::GetRevenueByScreen(envelope) => envelope.data.unwrap_or_default(),
        other => return Err(unexpected(&other)),
    };

    tracing::debug!(screens = revenue.len(), "Dashboard loaded");
    Ok(Dashboard { counts, revenue })
}

fn unexpected(response: &TheaterResponse) -> DispatchError {
    tracing::warn!(op = ?response.op(), "Unexpected dashboard response");
    DispatchError::Rejected(ClassifiedError::Generic(
        "Unexpected dashboard response".to_string(),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinepass_api::types::ScreenRevenue;
    use cinepass_api::{Envelope, ErrorBody};
    use cinepass_runtime::Store;
    use cinepass_session::mocks::MockTheaterGateway;
    use cinepass_session::{SessionEnvironment, TheaterReducer, TheaterState};

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn store(gateway: MockTheaterGateway) -> TheaterStore<MockTheaterGateway> {
        let state = TheaterState {
            session: cinepass_session::SessionState {
                is_authenticated: true,
                ..Default::default()
            },
        };
        Store::new(state, TheaterReducer::new(), SessionEnvironment::new(gateway))
    }

    fn revenue() -> RevenueReport {
        vec![
            ScreenRevenue {
                screen_name: "Audi 1".to_string(),
                revenue: 1200.0,
            },
            ScreenRevenue {
                screen_name: "Audi 2".to_string(),
                revenue: 800.5,
            },
        ]
    }

    #[test]
    fn test_both_calls_succeed() {
        let gateway = MockTheaterGateway::new().with_handler(|request| match request {
            TheaterRequest::GetCountStats => Ok(TheaterResponse::GetCountStats(Envelope::success(
                "ok",
                CountStats {
                    screens: 2,
                    shows: 9,
                    bookings: 41,
                },
            ))),
            TheaterRequest::GetRevenueByScreen => Ok(TheaterResponse::GetRevenueByScreen(
                Envelope::success("ok", revenue()),
            )),
            _ => Err(ClassifiedError::Generic("unexpected".to_string())),
        });

        let dashboard = tokio_test::block_on(async {
            let store = store(gateway.clone());
            load_dashboard(&store, TIMEOUT).await
        });
        let dashboard = tokio_test::assert_ok!(dashboard);

        assert_eq!(dashboard.counts.bookings, 41);
        assert!((dashboard.total_revenue() - 2000.5).abs() < f64::EPSILON);
        assert_eq!(gateway.call_count(), 2);
    }

    #[test]
    fn test_either_failure_fails_the_join() {
        let gateway = MockTheaterGateway::new().with_handler(|request| match request {
            TheaterRequest::GetCountStats => Ok(TheaterResponse::GetCountStats(Envelope::success(
                "ok",
                CountStats::default(),
            ))),
            _ => Err(ClassifiedError::Http {
                status: 500,
                body: ErrorBody::message("Revenue unavailable"),
            }),
        });

        let result = tokio_test::block_on(async {
            let store = store(gateway);
            load_dashboard(&store, TIMEOUT).await
        });
        let error = tokio_test::assert_err!(result);
        assert_eq!(
            error.classified().and_then(ClassifiedError::status),
            Some(500)
        );
    }
}
