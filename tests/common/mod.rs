#![allow(dead_code)]

pub use construplan_test_utils::builders;
pub use construplan_test_utils::{init_tracing, with_timeout};
