use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entity::Entity;
use crate::sort::Sort;

/// How a successful `DELETE /{id}` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReply {
    /// `200` with `{"message": "<Name> successfully deleted", "deleted": record}`.
    Message,
    /// `204` with an empty body.
    NoContent,
}

/// An entity exposed as a REST collection by [`crud_routes`](crate::crud_routes).
///
/// `Create` is the POST payload and carries the required-field rules.
/// `Patch` is the PUT/PATCH payload: every field optional, absent fields keep
/// their stored value. The entity's own `garde` rules are checked again after
/// a patch has been applied.
///
/// ```ignore
/// impl Resource for Contact {
///     const NAME: &'static str = "Contact";
///     type Create = NewContact;
///     type Patch = ContactPatch;
///
///     fn from_create(input: NewContact, _now: DateTime<Utc>) -> Self { ... }
///     fn apply(&mut self, patch: ContactPatch, _now: DateTime<Utc>) { ... }
/// }
/// ```
pub trait Resource: Entity + Clone + Serialize + garde::Validate<Context = ()> {
    /// Singular display name used in messages (`"Book"`).
    const NAME: &'static str;

    type Create: DeserializeOwned + garde::Validate<Context = ()> + Send + 'static;

    type Patch: DeserializeOwned + Send + 'static;

    fn from_create(input: Self::Create, now: DateTime<Utc>) -> Self;

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Ordering of `GET /` when no `sort` parameter is given.
    fn default_sort() -> Sort {
        Sort::asc(Self::id_column())
    }

    fn delete_reply() -> DeleteReply {
        DeleteReply::Message
    }
}
