#![warn(missing_docs)]

//! Validated network configuration for forked-chain test runners.
//!
//! A [`ConfigProvider`] loads a [`NetworkConfig`] once at startup, checks its
//! invariants and hands out the immutable record.

mod config;
/// Default values and bundled data
pub mod defaults;
mod error;
mod persist;
mod provider;
/// Rendering of hardhat configuration files
pub mod render;
mod runner;
mod validation;

pub use self::{
    config::{ForkSpec, NetworkConfig, NetworkProfile},
    error::ConfigError,
    persist::ConfigFormat,
    provider::ConfigProvider,
    render::render_hardhat_config,
    runner::{ForkRunnerConfig, RunnerConfig},
};
