use crate::{id::Id, time::Timestamp};

/// A recipient group location that is supplied by a warehouse.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id           : Id,
    pub name         : String,
    pub address      : String,
    pub population   : u32,
    pub received_at  : Timestamp,
    pub warehouse_id : Id,
}

impl Community {
    /// Names are compared case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

/// The normalized form of a community name used for lookups.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
