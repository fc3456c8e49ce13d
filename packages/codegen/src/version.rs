//! Version Information

use crate::util::Version;
use once_cell::sync::Lazy;

/// Crate version, exposed through the Node.js bindings.
pub static VERSION: Lazy<Version> = Lazy::new(|| Version::new(env!("CARGO_PKG_VERSION")));
