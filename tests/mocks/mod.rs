// Shared helpers for the browser tests
#![allow(dead_code)]

pub mod dom;
pub mod session_mock;
