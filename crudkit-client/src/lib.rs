//! Typed REST client for crudkit resources.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ResourceClient`] | list / get / create / update / delete over HTTP |
//! | [`RetryPolicy`] | Bounded retry, waiting `base_delay * 2^attempt` between attempts |
//! | [`ResourceView`] | Local copy of a collection, reconciled after each mutation |
//! | [`FormDraft`] | Form values validated locally before they are sent |

mod client;
mod error;
mod form;
mod retry;
mod view;

pub use client::ResourceClient;
pub use error::ClientError;
pub use form::FormDraft;
pub use retry::RetryPolicy;
pub use view::ResourceView;
