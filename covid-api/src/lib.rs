//! Client side of the COVID-19 case API.
//!
//! - `backend`: the [`Backend`] trait, the seam every controller talks through
//! - `http`: [`HttpBackend`], the reqwest implementation (native and WASM)
//! - `error`: [`ApiError`], the single failure type of every call

pub mod backend;
pub mod error;
pub mod http;

pub use backend::Backend;
pub use error::{ApiError, Result};
pub use http::HttpBackend;
