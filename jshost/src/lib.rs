//! Bootstrap shim for a legacy embedded-script environment.
//!
//! Legacy scripts expect a small set of host primitives: script loading, a
//! filesystem view built from plain path strings, and bounded directory
//! traversal for script discovery. This crate reimplements those primitives
//! on the native host. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic path logic ([`core::path::FilePath`]
//!   parsing and normalization). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem facade, tree listing,
//!   configuration). Isolated behind the [`io::fs::Vfs`] trait to enable
//!   substitution in tests.
//!
//! [`include`] ties the two together to discover and load script files; the
//! former process-wide `LOG`/`SYS`/`IO` globals are replaced by explicit
//! values passed to constructors.

pub mod core;
pub mod include;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
