//! Shared test support.

mod helpers;

pub(crate) use gated::GatedCartService;
pub(crate) use helpers::*;
pub(crate) use logs::ErrorEvents;
