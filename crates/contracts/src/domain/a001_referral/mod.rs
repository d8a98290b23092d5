pub mod aggregate;
pub mod session;

pub use aggregate::{FormField, ReferralFormData};
pub use session::{WidgetPhase, WidgetSession};
