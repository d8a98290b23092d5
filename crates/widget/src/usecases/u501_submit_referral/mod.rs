//! Browser side of referral submission: fetch for the webhooks, setTimeout for the pause.

use async_trait::async_trait;
use contracts::usecases::u501_submit_referral::{
    Pause, SubmissionSequencer, TransportError, WebhookTransport,
};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// POST via `fetch`. No timeout: a hung request blocks the sequence.
pub struct FetchTransport;

#[async_trait(?Send)]
impl WebhookTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<u16, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(response.status())
    }
}

pub struct TimerPause;

#[async_trait(?Send)]
impl Pause for TimerPause {
    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

pub fn browser_sequencer() -> SubmissionSequencer<FetchTransport, TimerPause> {
    SubmissionSequencer::new(FetchTransport, TimerPause)
}
