pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod remote;

pub use domain::*;
pub use remote::CardClient;
