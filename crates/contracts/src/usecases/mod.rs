pub mod common;
pub mod u501_submit_referral;
