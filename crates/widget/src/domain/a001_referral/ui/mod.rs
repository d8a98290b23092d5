pub mod thank_you;
pub mod widget;
