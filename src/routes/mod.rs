//! Route handlers for the worker bridge.

pub mod util;
pub mod vn;
