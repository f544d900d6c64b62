#![allow(async_fn_in_trait)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod capabilities;
pub mod commands;
pub mod config;
pub mod datatypes;
pub mod devices;
pub mod dispatch;
pub mod error;
