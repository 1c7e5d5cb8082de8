// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for the typography crates.
//!
//! - The `util` module contains helpers shared by different test modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared helpers only need to be declared once.
//! - Put the "topic" of a test at the start of its name (`prepare_keeps_lines` rather than
//!   `keeps_lines_prepare`), and add tests to the module for that topic.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod style;
mod util;
