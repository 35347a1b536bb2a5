pub mod common;
pub mod u601_contract_review;
