use crate::{id::Id, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub id          : Id,
    pub address     : String,
    pub capacity    : f64,
    pub stored_date : Date,
    pub expiry_date : Date,
}
