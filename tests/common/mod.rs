#![allow(dead_code)] // Each test binary uses a different slice of the fixtures

pub mod fixtures;
