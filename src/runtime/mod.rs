//! Runtime module - host integration
//!
//! `App` drives the update loop for an embedding host: messages go in through
//! [`App::dispatch`], settings writes run on a single background writer and
//! report back through a channel drained by [`App::pump`] / [`App::wait_one`].

pub mod app;

pub use app::App;
