//! Pure, deterministic path logic. No I/O.

pub mod path;
