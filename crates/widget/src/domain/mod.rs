pub mod a001_referral;
