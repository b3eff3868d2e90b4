//! Order creation: validates the customer and stock, prices the lines,
//! stores the order, and writes back the decremented quantities.

mod error;
mod request;
mod service;

pub use error::*;
pub use request::*;
pub use service::*;
