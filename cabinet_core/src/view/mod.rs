//! Wire-facing projections and envelopes. Everything here serializes to the
//! JSON field names API clients rely on.

pub mod dto;
pub mod pagination;

pub use dto::{build_error, ErrorDto, IdInfo, ResultDto, ShortNamedInfo};
pub use pagination::{
    build_paged, build_pagination, is_valid_pagination, Paged, PagedResult, Pagination,
    PaginationError,
};
