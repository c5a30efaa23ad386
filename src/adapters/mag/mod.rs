//! Mobile Access Gateway adapter
//!
//! This module provides the HTTP transport and the client executing the
//! IHE transactions of the Swiss EPR gateway.

pub mod client;
pub mod transport;

pub use client::{DocumentLocation, MagClient};
pub use transport::{build_url, HttpTransport, ReqwestTransport, TransportRequest};
