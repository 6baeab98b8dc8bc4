pub mod account;
pub mod badge;
pub mod tab;
