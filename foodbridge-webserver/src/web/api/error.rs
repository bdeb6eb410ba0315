use super::{json_detail_response, json_error_response};
use anyhow::anyhow;
use foodbridge_application::error::{AppError, BError};
pub use foodbridge_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(err) if err.is_immutability_violation() => {
                            return json_detail_response(req, err, Status::BadRequest);
                        }
                        BError::Parameter(err) => {
                            return json_error_response(req, err, err.field(), Status::BadRequest);
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, None, Status::NotFound);
                        }
                        BError::Repo(RepoError::InUse | RepoError::AlreadyExists) => {
                            return json_error_response(req, err, None, Status::Conflict);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &err, None, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, None, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, None, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_repository_errors_of_use_cases() {
        let err = Error::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            Error::App(AppError::Business(BError::Repo(RepoError::NotFound)))
        ));
    }

    #[test]
    fn keep_validation_errors() {
        match Error::from(ParameterError::CommunityNameRequired) {
            Error::App(AppError::Business(BError::Parameter(err))) => {
                assert_eq!(Some("community_name"), err.field());
            }
            err => panic!("Unexpected error: {err}"),
        }
    }
}
