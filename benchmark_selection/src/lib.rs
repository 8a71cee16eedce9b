//!
//! The benchmark selection library.
//!

pub(crate) mod catalog;
pub(crate) mod error;
pub(crate) mod identifier;
pub(crate) mod legacy_guard;
pub(crate) mod manifest;
pub(crate) mod pattern;
pub(crate) mod resolver;
pub(crate) mod selection;

pub use self::catalog::Catalog;
pub use self::error::Error as SelectionError;
pub use self::identifier::check_name;
pub use self::identifier::Mode as IdentifierMode;
pub use self::legacy_guard::LegacyGuard;
pub use self::manifest::benchmark::Benchmark;
pub use self::manifest::error::Error as ManifestError;
pub use self::manifest::Manifest;
pub use self::pattern::Pattern;
pub use self::resolver::resolve;
pub use self::resolver::resolved::Resolved;
pub use self::resolver::Resolver;
pub use self::selection::operator::Operator;
pub use self::selection::parse_raw_selections;
pub use self::selection::parse_selections;
pub use self::selection::raw::RawSelection;
pub use self::selection::split_selections;
pub use self::selection::Selection;
