//! Unit tests for hotswap
//!
//! These tests use scripted process runners and fake port probes and run fast
//! without spawning processes or binding sockets.

mod mocks;
mod port_allocator_service;
mod property_tests;
