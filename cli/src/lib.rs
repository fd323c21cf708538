//! Hotswap library — build orchestration and port allocation for a
//! live-reload development loop, plus the `hotswap` command surface.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
