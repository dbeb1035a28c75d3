// src/core/mod.rs

pub mod html;
pub mod links;
pub mod net;
pub mod sanitize;

pub use html::Attr;
pub use links::Link;
pub use net::{Fetch, Response, Session};
