mod communities;
mod deliveries;
mod donation_requests;
mod donations;
mod error;
mod resolve_community;
mod restaurants;
mod users;
mod warehouses;

#[cfg(test)]
pub mod tests;

pub use self::{
    communities::*, deliveries::*, donation_requests::*, donations::*, error::Error,
    resolve_community::*, restaurants::*, users::*, warehouses::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
