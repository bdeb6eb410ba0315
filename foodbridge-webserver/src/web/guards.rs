use std::{convert::Infallible, ops::Deref};

use foodbridge_db_sqlite::Connections as ConnectionPool;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

/// Header carrying the id of the acting user.
pub const USER_ID_HEADER: &str = "X-USER-ID";

/// The database connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}

/// The claimed identity of the caller.
///
/// The value is not verified here. Ids that don't refer
/// to an existing user are ignored by the use cases.
#[derive(Debug, Default)]
pub struct Identity(Option<String>);

impl Identity {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Identity {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user_id = request
            .headers()
            .get_one(USER_ID_HEADER)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToOwned::to_owned);
        if let Some(id) = &user_id {
            debug!("Request on behalf of user {id}");
        }
        Outcome::Success(Identity(user_id))
    }
}

pub struct Version(pub &'static str);
