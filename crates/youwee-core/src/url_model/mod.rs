//! String-level URL screening.
//!
//! A pre-filter applied to candidate download URLs before (and after)
//! structural parsing. It works on the raw text so that encoded tricks are
//! caught even when a URL parser would silently decode or normalize them.

mod safe;

pub use safe::is_safe_url;

/// Upper bound on any link or URL string this crate will look at.
pub const MAX_URL_LENGTH: usize = 4096;
