#![allow(dead_code)]

mod app;
mod factory;

pub use app::{spawn_server, test_config, TestApp};
pub use factory::{Factory, TestAuth, TEST_PASSWORD};
