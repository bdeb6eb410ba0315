pub use foodbridge_core::{entities, repositories, usecases};

pub mod prelude {
    pub use foodbridge_application::error::{AppError, BError};

    pub use super::{entities::*, repositories::*};
}
