extern crate core;

pub mod identical;
