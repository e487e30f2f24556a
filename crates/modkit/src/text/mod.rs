//! String helpers.
//!
//! - **Composite formatting**: `{0:S3}` style templates with SI support
//! - **Builders**: pooled `String` buffers and indentation helpers
//! - **Lists**: joining slices and iterators for log output
//! - **Hashing**: short hex digests for cache keys and identifiers

mod builder;
mod composite;
mod hash;
mod list;

pub use builder::{INDENT_WIDTH, PooledString, StringBuilderExt, StringBuilderPool};
pub use composite::{FormatArg, MAX_ALIGNMENT, format};
pub use hash::{MD5_HEX_LEN, to_md5_hash};
pub use list::{DEFAULT_DELIMITER, sprint, sprint_nullable, sprint_with};
