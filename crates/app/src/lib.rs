//! Storefront cart client: keeps a local cart in step with the storefront's
//! cart API and drives the cart page.

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod identity;
pub mod images;
pub mod logging;
pub mod navigation;
pub mod store;
pub mod view;

#[cfg(test)]
mod test;
