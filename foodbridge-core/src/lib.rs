pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use foodbridge_entities::{
        community::*, delivery::*, donation::*, donation_request::*, id::*, restaurant::*,
        time::*, user::*, warehouse::*,
    };
}
