#![forbid(unsafe_code)]

//! Bilingual Rule of 72 calculator for the terminal.
//!
//! Enter an amount and an annual interest rate, press Enter, and the
//! doubling time (72 divided by the rate) comes back as a localized
//! sentence with the substituted values emphasized. English and Nepali
//! ship built in; switching is instant and never loses typed input.
//!
//! The binary wires these modules onto the `r72-runtime` event loop;
//! everything below the [`app`] model is a plain function of its inputs
//! and is exercised directly by the integration tests.

pub mod app;
pub mod calc;
pub mod cli;
pub mod logging;
pub mod theme;
pub mod ui;
