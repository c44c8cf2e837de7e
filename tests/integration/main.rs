//! Integration tests for motd

mod helpers;

mod compose_test;
mod config_test;
