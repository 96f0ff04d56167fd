//! Zero-based page windows over an in-memory sequence.
//!
//! A pagination is valid when the first row of its page does not lie past
//! `total`, i.e. `page * page_size <= total`. Construction and validation use
//! the same rule, so a value returned by [`build_pagination`] is always
//! accepted by [`build_paged`]. The last page may be partial; its window is
//! clamped to `total`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::view::dto::ResultDto;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub total: u64,
    pub page_size: u32,
}

impl Pagination {
    /// Offset of the first row on this page.
    pub fn offset(&self) -> u64 {
        // u32 * u32 always fits in u64
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Exclusive end of this page's window, clamped to `total`.
    pub fn end(&self) -> u64 {
        (self.offset() + u64::from(self.page_size)).min(self.total)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub entities: Vec<T>,
    pub pageable: Pagination,
}

/// `{"result": {"entities": [...], "pageable": {...}}}`
pub type PagedResult<T> = ResultDto<Paged<T>>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("incorrect pagination params: page {}, total {}, page size {}", .0.page, .0.total, .0.page_size)]
    Invalid(Pagination),

    /// The caller handed in fewer entities than `total` promised.
    #[error("page window ends at {end} but only {len} entities were supplied")]
    OutOfRange { len: usize, end: u64 },
}

pub fn is_valid_pagination(pagination: &Pagination) -> bool {
    pagination.offset() <= pagination.total
}

/// Returns `None` (and logs) when `page` starts beyond `total`.
pub fn build_pagination(page: u32, total: u64, page_size: u32) -> Option<Pagination> {
    let pagination = Pagination {
        page,
        total,
        page_size,
    };

    if !is_valid_pagination(&pagination) {
        warn!(page, total, page_size, "incorrect pagination params");
        return None;
    }

    Some(pagination)
}

/// Cuts the page described by `pageable` out of `entities`.
///
/// `entities` is expected to hold all `total` rows. An empty input yields an
/// empty page regardless of `total`.
pub fn build_paged<T: Clone>(
    entities: &[T],
    pageable: &Pagination,
) -> Result<PagedResult<T>, PaginationError> {
    if !is_valid_pagination(pageable) {
        warn!(
            page = pageable.page,
            total = pageable.total,
            page_size = pageable.page_size,
            "incorrect pagination params"
        );
        return Err(PaginationError::Invalid(*pageable));
    }

    if entities.is_empty() {
        return Ok(ResultDto::new(Paged {
            entities: Vec::new(),
            pageable: *pageable,
        }));
    }

    let out_of_range = PaginationError::OutOfRange {
        len: entities.len(),
        end: pageable.end(),
    };
    let start = usize::try_from(pageable.offset()).map_err(|_| out_of_range.clone())?;
    let end = usize::try_from(pageable.end()).map_err(|_| out_of_range.clone())?;
    let window = entities.get(start..end).ok_or(out_of_range)?;

    Ok(ResultDto::new(Paged {
        entities: window.to_vec(),
        pageable: *pageable,
    }))
}
