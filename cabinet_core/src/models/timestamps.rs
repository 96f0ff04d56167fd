//! Created/changed bookkeeping applied by the repositories right before a
//! row is written.

use chrono::{DateTime, Utc};

/// Kind of write about to be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Insert,
    Update,
}

/// Entities whose timestamps are owned by the persistence layer.
///
/// Implementations only touch their own timestamp fields and never fail.
/// Write-once entities have no `changed` field and ignore [`WriteOp::Update`].
pub trait Timestamped {
    fn before_write(&mut self, op: WriteOp, now: DateTime<Utc>);
}

/// Stamps `entity` with the current UTC time for `op`.
pub fn stamp<T: Timestamped + ?Sized>(entity: &mut T, op: WriteOp) {
    entity.before_write(op, Utc::now());
}
