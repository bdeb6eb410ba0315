#[macro_use]
extern crate log;

mod deliveries;
mod donation_requests;
mod donations;
mod restaurants;
mod users;
mod warehouses;

pub mod prelude {
    pub use super::{
        deliveries::*, donation_requests::*, donations::*, restaurants::*, users::*,
        warehouses::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use foodbridge_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use foodbridge_db_sqlite::Connections;
}
