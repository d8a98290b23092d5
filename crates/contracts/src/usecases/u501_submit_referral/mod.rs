pub mod ports;
pub mod sequencer;

pub use ports::{Pause, TransportError, WebhookTransport};
pub use sequencer::{
    SubmissionReport, SubmissionSequencer, SubmitError, WebhookDelivery, WEBHOOK_PAUSE,
};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitReferral;

impl UseCaseMetadata for SubmitReferral {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "submit_referral"
    }

    fn description() -> &'static str {
        "Отправка формы рекомендации на два вебхука с паузой между ними"
    }
}
