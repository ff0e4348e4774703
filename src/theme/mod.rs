//! Page styling for Signature Studio.

mod styles;

pub use styles::GLOBAL_STYLES;
