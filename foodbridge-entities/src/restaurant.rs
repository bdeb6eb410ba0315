use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id            : Id,
    pub name          : String,
    pub address       : String,
    pub contact_phone : Option<String>,
}
