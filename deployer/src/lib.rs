pub mod account;
pub mod artifact;
pub mod cli;
pub mod contract;
pub mod env;
