//! # Record Trait
//!
//! The `Record` trait is the contract a stored type must satisfy to live in a
//! [`Repository`](crate::repository::Repository) and be served by a
//! [`ResourceActor`](crate::framework::ResourceActor). The repository and actor
//! are written once against this trait; `Product` is the record this crate ships.
//!
//! A record is split in two:
//! - the **draft** (`Record::Draft`): every field except the id, supplied by callers
//!   on create and update,
//! - the **id**: assigned by the repository and never changed afterwards.

use std::fmt::Debug;

use crate::model::RecordId;

/// Trait that any stored entity must implement.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Short type name used as the `entity_type` field in log events.
    const KIND: &'static str;

    /// The record minus its id. Create and update both take a full draft.
    type Draft: Debug + Send + 'static;

    fn id(&self) -> &RecordId;

    /// Builds the full record from an assigned id and a draft.
    ///
    /// Called on create with a fresh id and on update with the existing one.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}
