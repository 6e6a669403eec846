//! # Record Repository
//!
//! The in-memory store behind every product operation. A [`Repository`] owns its
//! collection outright; each instance is independent, so tests build their own and
//! the running system hands exactly one to a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## Contract
//!
//! | Operation | Result | Absent when |
//! |-----------|--------|-------------|
//! | [`list`](Repository::list) | every record, insertion order | never |
//! | [`get`](Repository::get) | the first record with that id | id empty or unknown |
//! | [`create`](Repository::create) | the stored record, fresh id | never |
//! | [`update`](Repository::update) | the replaced record | id empty or unknown |
//! | [`delete`](Repository::delete) | the removed record | id empty or unknown |
//!
//! `None` is the only failure signal. An unknown id and an empty id are not told
//! apart, and a failed update or delete leaves the collection untouched.
//!
//! ## Borrowing Instead of Copying
//!
//! `list` and `get` hand out shared borrows of the stored records. The borrow
//! checker rules out mutating through them or holding them across a later
//! `create`/`update`/`delete`, so there is no way to change the collection except
//! through this type.
//!
//! Lookups are linear scans over a `Vec`. The collections this serves hold tens to
//! low hundreds of records, and the `Vec` doubles as the display order.

use tracing::{debug, info, warn};

use crate::framework::Record;
use crate::identity::{IdGenerator, UuidGenerator};
use crate::model::Product;

/// Ordered, in-memory collection of records with identity-based CRUD.
#[derive(Debug)]
pub struct Repository<T: Record, G: IdGenerator = UuidGenerator> {
    records: Vec<T>,
    ids: G,
}

/// The repository the product actor runs on.
pub type ProductRepository<G = UuidGenerator> = Repository<Product, G>;

impl<T: Record> Repository<T, UuidGenerator> {
    /// Creates an empty repository that assigns UUID v4 ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl<T: Record> Default for Repository<T, UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record, G: IdGenerator> Repository<T, G> {
    /// Creates an empty repository that draws ids from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// Appends pre-built records, keeping their ids.
    ///
    /// Records with an empty id, or an id already present, are skipped so the
    /// uniqueness invariant holds for seeded data as well.
    pub fn with_records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        for record in records {
            let id = record.id();
            if id.is_empty() || self.position(id.as_str()).is_some() {
                warn!(entity_type = T::KIND, %id, "Skipping seed record with unusable id");
                continue;
            }
            self.records.push(record);
        }
        info!(entity_type = T::KIND, size = self.records.len(), "Seeded");
        self
    }

    /// Returns the whole collection in insertion order.
    pub fn list(&self) -> &[T] {
        debug!(entity_type = T::KIND, size = self.records.len(), "List");
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by id.
    ///
    /// Returns `None` if `id` is empty or no record carries it.
    pub fn get(&self, id: &str) -> Option<&T> {
        let item = self.position(id).map(|index| &self.records[index]);
        debug!(entity_type = T::KIND, %id, found = item.is_some(), "Get");
        item
    }

    /// Stores a new record built from `draft` under a freshly generated id.
    ///
    /// Always succeeds. The record is appended to the end of the collection and a
    /// reference to the stored copy is returned.
    pub fn create(&mut self, draft: T::Draft) -> &T {
        let id = self.ids.next_id();
        debug!(entity_type = T::KIND, ?draft, "Create");

        let index = self.records.len();
        self.records.push(T::from_draft(id, draft));
        let item = &self.records[index];
        info!(entity_type = T::KIND, id = %item.id(), size = self.records.len(), "Created");
        item
    }

    /// Replaces the record with `id` by `{id, ...draft}`, in place.
    ///
    /// This is a total replace: fields absent from `draft` are not carried over.
    /// Returns `None`, without touching anything, if `id` is empty or unknown.
    pub fn update(&mut self, id: &str, draft: T::Draft) -> Option<&T> {
        debug!(entity_type = T::KIND, %id, ?draft, "Update");
        let Some(index) = self.position(id) else {
            warn!(entity_type = T::KIND, %id, "Not found");
            return None;
        };

        let slot = &mut self.records[index];
        *slot = T::from_draft(slot.id().clone(), draft);
        info!(entity_type = T::KIND, %id, "Updated");
        Some(&self.records[index])
    }

    /// Removes the first record with `id` and returns it.
    ///
    /// Returns `None`, without touching anything, if `id` is empty or unknown.
    pub fn delete(&mut self, id: &str) -> Option<T> {
        debug!(entity_type = T::KIND, %id, "Delete");
        let Some(index) = self.position(id) else {
            warn!(entity_type = T::KIND, %id, "Not found");
            return None;
        };

        let removed = self.records.remove(index);
        info!(entity_type = T::KIND, %id, size = self.records.len(), "Deleted");
        Some(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.records.iter().position(|r| r.id().as_str() == id)
    }
}
