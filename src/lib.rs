#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
// Allow acronyms like EDID
#![allow(clippy::upper_case_acronyms)]

//! # drm-sink-info: what is on the other end of the cable
//!
//! This crate answers two questions a display driver asks about a freshly attached
//! monitor: *who made it*, and *what can its DisplayPort receiver do*.
//!
//! ## Structure of the crate
//!
//! - [`edid`] decodes the vendor & product identification of an EDID block and
//!   renders it as text.
//! - [`dp`] queries a DisplayPort sink for its MST mode and Adaptive-Sync SDP
//!   support, given its DPCD receiver capabilities and an AUX channel.
//! - [`backend`] contains glue to fetch those inputs from the system.
//!
//! The two halves are independent of each other. Neither performs I/O on its own:
//! EDID bytes are handed in as slices, and DPCD registers are read through the
//! [`dp::DpAux`] trait the caller implements (or through [`dp::DpAuxDevice`]).
//!
//! ## Failure policy
//!
//! Missing data is an ordinary condition for display hardware. An EDID that is
//! too short yields an all zero [`edid::ProductId`], and a sink whose capability
//! registers cannot be read is treated as lacking the capability. None of the
//! decoding or capability query functions return errors or panic on bad input.
//!
//! ### Logging
//!
//! This crate makes use of [`tracing`] for its internal logging. Failed AUX reads
//! are reported at `debug` level, capability decisions at `trace` level.
//!
//! For release builds it is recommended to limit the log level during compile time.
//! This can be done by adding a dependency to [`tracing`] and enabling the corresponding features.
//! For example to enable `trace` messages for debug builds, but limit release builds to `debug` add
//! the following in your binary crate `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tracing = { version = "0.1", features = ["max_level_trace", "release_max_level_debug"] }
//! ```
//!
//! Decoded records can also be printed straight into the log with a
//! [`utils::LogPrinter`].

pub mod backend;
pub mod dp;
pub mod edid;
pub mod utils;

pub mod reexports;
