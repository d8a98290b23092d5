use super::ports::{Pause, TransportError, WebhookTransport};
use crate::domain::a001_referral::{ReferralFormData, WidgetSession};
use std::time::Duration;
use uuid::Uuid;

/// Пауза между первым и вторым вебхуком.
///
/// Второй вебхук может зависеть от записи, созданной первым (например, в CRM),
/// подтверждения от первого нет, поэтому ждём фиксированное время.
pub const WEBHOOK_PAUSE: Duration = Duration::from_millis(3000);

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode form data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("webhook {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookDelivery {
    pub url: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Только для логов, в тело запроса не попадает
    pub attempt_id: Uuid,
    pub deliveries: Vec<WebhookDelivery>,
}

/// Последовательная отправка формы: вебхук 1, пауза, вебхук 2.
///
/// Без ретраев и таймаутов; первая же сетевая ошибка прерывает цепочку.
pub struct SubmissionSequencer<T, P> {
    transport: T,
    pause: P,
}

impl<T, P> SubmissionSequencer<T, P>
where
    T: WebhookTransport,
    P: Pause,
{
    pub fn new(transport: T, pause: P) -> Self {
        Self { transport, pause }
    }

    pub async fn submit(
        &self,
        targets: &[Option<String>; 2],
        form: &ReferralFormData,
    ) -> Result<SubmissionReport, SubmitError> {
        let attempt_id = Uuid::new_v4();
        let body = serde_json::to_string(form)?;
        let mut deliveries = Vec::with_capacity(2);

        let [first, second] = targets;

        if let Some(url) = first {
            deliveries.push(self.deliver(attempt_id, url, &body).await?);
        }

        log::debug!(
            "[{}] waiting {} ms before second webhook",
            attempt_id,
            WEBHOOK_PAUSE.as_millis()
        );
        self.pause.pause(WEBHOOK_PAUSE).await;

        if let Some(url) = second {
            deliveries.push(self.deliver(attempt_id, url, &body).await?);
        }

        Ok(SubmissionReport {
            attempt_id,
            deliveries,
        })
    }

    /// Полный цикл отправки над состоянием виджета: снимок формы,
    /// оба вебхука, затем `submit_succeeded` или `submit_failed`.
    ///
    /// `with_session` даёт доступ к состоянию (в UI это сигнал). Возвращает
    /// `None`, если отправка уже идёт.
    pub async fn submit_session<F>(
        &self,
        targets: &[Option<String>; 2],
        with_session: F,
    ) -> Option<Result<SubmissionReport, SubmitError>>
    where
        F: Fn(&mut dyn FnMut(&mut WidgetSession)),
    {
        let mut snapshot = None;
        with_session(&mut |s: &mut WidgetSession| snapshot = s.begin_submit());
        let form = snapshot?;

        let result = self.submit(targets, &form).await;
        match &result {
            Ok(_) => with_session(&mut |s: &mut WidgetSession| s.submit_succeeded()),
            Err(_) => with_session(&mut |s: &mut WidgetSession| s.submit_failed()),
        }
        Some(result)
    }

    async fn deliver(
        &self,
        attempt_id: Uuid,
        url: &str,
        body: &str,
    ) -> Result<WebhookDelivery, SubmitError> {
        let status = self
            .transport
            .post_json(url, body)
            .await
            .map_err(|source| SubmitError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Ответ не анализируется: любой завершившийся запрос считается успехом
        if (200..300).contains(&status) {
            log::debug!("[{}] webhook {} answered HTTP {}", attempt_id, url, status);
        } else {
            log::warn!("[{}] webhook {} answered HTTP {}", attempt_id, url, status);
        }

        Ok(WebhookDelivery {
            url: url.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_referral::{FormField, WidgetPhase};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        url: String,
        body: String,
        at_ms: u64,
    }

    /// Транспорт в памяти; время берётся из общих виртуальных часов
    struct FakeTransport {
        clock: Rc<Cell<u64>>,
        calls: Rc<RefCell<Vec<Call>>>,
        failing: Vec<&'static str>,
        status: u16,
    }

    #[async_trait(?Send)]
    impl WebhookTransport for FakeTransport {
        async fn post_json(&self, url: &str, body: &str) -> Result<u16, TransportError> {
            self.calls.borrow_mut().push(Call {
                url: url.to_string(),
                body: body.to_string(),
                at_ms: self.clock.get(),
            });
            if self.failing.iter().any(|f| *f == url) {
                return Err(TransportError("connection refused".into()));
            }
            Ok(self.status)
        }
    }

    struct FakePause {
        clock: Rc<Cell<u64>>,
        pauses: Rc<RefCell<Vec<Duration>>>,
    }

    #[async_trait(?Send)]
    impl Pause for FakePause {
        async fn pause(&self, duration: Duration) {
            self.pauses.borrow_mut().push(duration);
            self.clock.set(self.clock.get() + duration.as_millis() as u64);
        }
    }

    struct Harness {
        calls: Rc<RefCell<Vec<Call>>>,
        pauses: Rc<RefCell<Vec<Duration>>>,
        sequencer: SubmissionSequencer<FakeTransport, FakePause>,
    }

    fn harness(failing: Vec<&'static str>, status: u16) -> Harness {
        let clock = Rc::new(Cell::new(0));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let pauses = Rc::new(RefCell::new(Vec::new()));
        let sequencer = SubmissionSequencer::new(
            FakeTransport {
                clock: clock.clone(),
                calls: calls.clone(),
                failing,
                status,
            },
            FakePause {
                clock,
                pauses: pauses.clone(),
            },
        );
        Harness {
            calls,
            pauses,
            sequencer,
        }
    }

    fn sample_form() -> ReferralFormData {
        let mut form = ReferralFormData::default();
        form.set(FormField::FirstName, "Ada");
        form.set(FormField::LastName, "Lovelace");
        form.set(FormField::PhoneNumber, "555-0100");
        form.set(FormField::ReferralFirstName, "Grace");
        form.set(FormField::ReferralLastName, "Hopper");
        form.set(FormField::ReferralPhone, "555-0199");
        form
    }

    fn both() -> [Option<String>; 2] {
        [
            Some("https://a.test/hook".into()),
            Some("https://b.test/hook".into()),
        ]
    }

    #[tokio::test]
    async fn test_two_posts_in_order_with_gap() {
        let h = harness(vec![], 200);
        let form = sample_form();

        let report = h.sequencer.submit(&both(), &form).await.unwrap();

        let calls = h.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].url, "https://a.test/hook");
        assert_eq!(calls[1].url, "https://b.test/hook");
        assert!(calls[1].at_ms - calls[0].at_ms >= 3000);

        let expected_body = serde_json::to_string(&form).unwrap();
        assert!(calls.iter().all(|c| c.body == expected_body));
        assert_eq!(report.deliveries.len(), 2);
    }

    #[tokio::test]
    async fn test_only_first_webhook_still_pauses() {
        let h = harness(vec![], 200);
        let targets = [Some("https://a.test/hook".to_string()), None];

        let report = h.sequencer.submit(&targets, &sample_form()).await.unwrap();

        assert_eq!(h.calls.borrow().len(), 1);
        assert_eq!(*h.pauses.borrow(), vec![WEBHOOK_PAUSE]);
        assert_eq!(report.deliveries[0].url, "https://a.test/hook");
    }

    #[tokio::test]
    async fn test_no_webhooks_only_pause() {
        let h = harness(vec![], 200);
        let report = h
            .sequencer
            .submit(&[None, None], &sample_form())
            .await
            .unwrap();

        assert!(h.calls.borrow().is_empty());
        assert_eq!(h.pauses.borrow().len(), 1);
        assert!(report.deliveries.is_empty());
    }

    #[tokio::test]
    async fn test_first_failure_aborts_sequence() {
        let h = harness(vec!["https://a.test/hook"], 200);

        let err = h.sequencer.submit(&both(), &sample_form()).await.unwrap_err();

        assert!(
            matches!(err, SubmitError::Transport { ref url, .. } if url == "https://a.test/hook")
        );
        assert_eq!(h.calls.borrow().len(), 1);
        assert!(h.pauses.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_second_failure_is_reported() {
        let h = harness(vec!["https://b.test/hook"], 200);

        let err = h.sequencer.submit(&both(), &sample_form()).await.unwrap_err();

        assert!(
            matches!(err, SubmitError::Transport { ref url, .. } if url == "https://b.test/hook")
        );
        assert_eq!(h.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_http_error_status_counts_as_success() {
        let h = harness(vec![], 500);

        let report = h.sequencer.submit(&both(), &sample_form()).await.unwrap();

        assert_eq!(
            report.deliveries,
            vec![
                WebhookDelivery {
                    url: "https://a.test/hook".into(),
                    status: 500
                },
                WebhookDelivery {
                    url: "https://b.test/hook".into(),
                    status: 500
                },
            ]
        );
    }

    fn open_session(form: ReferralFormData) -> RefCell<WidgetSession> {
        let mut session = WidgetSession::new();
        session.open();
        session.form = form;
        RefCell::new(session)
    }

    #[tokio::test]
    async fn test_session_failure_keeps_form_open() {
        let h = harness(vec!["https://a.test/hook"], 200);
        let session = open_session(sample_form());

        let result = h
            .sequencer
            .submit_session(&both(), |f| f(&mut *session.borrow_mut()))
            .await;

        assert!(matches!(result, Some(Err(SubmitError::Transport { .. }))));
        assert_eq!(h.calls.borrow().len(), 1);
        let session = session.into_inner();
        assert_eq!(session.phase(), WidgetPhase::Open);
        assert_eq!(session.form, sample_form());
        assert!(!session.show_thank_you);
    }

    #[tokio::test]
    async fn test_session_success_resets_and_thanks() {
        let h = harness(vec![], 200);
        let session = open_session(sample_form());

        let result = h
            .sequencer
            .submit_session(&both(), |f| f(&mut *session.borrow_mut()))
            .await;

        assert!(matches!(result, Some(Ok(ref report)) if report.deliveries.len() == 2));
        let expected_body = serde_json::to_string(&sample_form()).unwrap();
        assert!(h.calls.borrow().iter().all(|c| c.body == expected_body));

        let session = session.into_inner();
        assert_eq!(session.phase(), WidgetPhase::Closed);
        assert!(session.show_thank_you);
        assert_eq!(session.form, ReferralFormData::default());
    }

    #[tokio::test]
    async fn test_session_already_submitting_sends_nothing() {
        let h = harness(vec![], 200);
        let session = open_session(sample_form());
        session.borrow_mut().begin_submit();

        let result = h
            .sequencer
            .submit_session(&both(), |f| f(&mut *session.borrow_mut()))
            .await;

        assert!(result.is_none());
        assert!(h.calls.borrow().is_empty());
        assert!(h.pauses.borrow().is_empty());
    }
}
