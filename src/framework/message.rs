//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::error::FrameworkError;
use crate::framework::record::Record;
use crate::model::RecordId;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the repository's operations. Records travel
/// back by value: the actor clones what it hands out, so nothing outside the
/// actor task can reach the stored collection.
///
/// - **List**: the whole collection, in insertion order.
/// - **Get**: one record by id, `None` if absent.
/// - **Create**: stores a new record built from [`Record::Draft`] and returns it.
/// - **Update**: total replace of an existing record, `None` if absent.
/// - **Delete**: removes a record and returns it, `None` if absent.
#[derive(Debug)]
pub enum ResourceRequest<T: Record> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Update {
        id: RecordId,
        draft: T::Draft,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
}
