//! Sources of answer data for the resolver

use std::fmt::Debug;

use crate::dns_parser::{Name, RData, Type};

mod static_table;

pub use self::static_table::StaticLookup;

/// Supplies the record data the resolver answers with
///
/// Implementations are shared between responder tasks and must not change
/// while a request is being resolved.
pub trait Lookup: Debug + Send + Sync {
    /// Returns the data for `name` of type `typ`, if there is any
    fn lookup(&self, name: &Name, typ: Type) -> Option<RData>;
}
