//! HTTP clients for the sentiview dashboard
//!
//! Two request/response collaborators, both built on a shared
//! [`Transport`]:
//!
//! - [`MarketClient`] fetches daily closing prices from a chart endpoint.
//! - [`NewsClient`] searches recent articles matching a free-text query.
//!
//! Both clients are explicitly constructed from [`sv_core::Config`] and
//! passed to the pipeline driver; there is no process-global state. Calls
//! are sequential and are made without retries.

pub mod market;
pub mod news;
pub mod transport;

pub use market::MarketClient;
pub use news::NewsClient;
pub use transport::Transport;
