//! Display rendering helpers.

pub mod markdown;
