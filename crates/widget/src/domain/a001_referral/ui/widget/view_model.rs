use crate::usecases::u501_submit_referral::browser_sequencer;
use contracts::domain::a001_referral::{FormField, WidgetPhase, WidgetSession};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_submit_referral::SubmitReferral;
use contracts::shared::widget_config::WidgetConfig;
use leptos::prelude::*;

/// ViewModel for the referral widget. Both fields are arena handles, so it is `Copy`.
#[derive(Clone, Copy)]
pub struct ReferralWidgetViewModel {
    pub session: RwSignal<WidgetSession>,
    pub config: StoredValue<WidgetConfig>,
}

impl ReferralWidgetViewModel {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            session: RwSignal::new(WidgetSession::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.with(|s| s.is_open)
    }

    pub fn is_submitting(&self) -> bool {
        self.session.with(|s| s.phase() == WidgetPhase::Submitting)
    }

    pub fn show_thank_you(&self) -> bool {
        self.session.with(|s| s.show_thank_you)
    }

    pub fn field_value(&self, field: FormField) -> String {
        self.session.with(|s| s.form.get(field).to_string())
    }

    pub fn accent_style(&self) -> String {
        self.config
            .with_value(|c| format!("background-color: {};", c.button_color))
    }

    pub fn open_command(&self) {
        self.session.update(WidgetSession::open);
    }

    pub fn close_command(&self) {
        self.session.update(WidgetSession::close);
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.session.update(|s| s.set_field(field, value));
    }

    pub fn dismiss_thank_you_command(&self) {
        self.session.update(WidgetSession::dismiss_thank_you);
    }

    /// Run both webhooks. Required fields are enforced by the browser before
    /// the submit event is even dispatched.
    pub fn submit_command(&self) {
        let targets = self.config.with_value(|c| c.webhook_targets());
        let session = self.session;

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = browser_sequencer()
                .submit_session(&targets, |apply| session.update(|s| apply(s)))
                .await;

            match outcome {
                Some(Ok(report)) => log::info!(
                    "{} [{}]: delivered to {} webhook(s)",
                    SubmitReferral::full_name(),
                    report.attempt_id,
                    report.deliveries.len()
                ),
                Some(Err(e)) => {
                    log::error!("{}: error submitting form: {}", SubmitReferral::full_name(), e)
                }
                None => log::debug!("submission already in progress"),
            }
        });
    }
}
