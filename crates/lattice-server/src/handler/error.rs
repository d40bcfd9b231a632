//! HTTP error handling for the workflow API.
//!
//! Errors carry a kind (the HTTP status family), an optional user-facing
//! message and an optional resource name, and serialize as an
//! [`ErrorResponse`] body. Every engine error maps onto exactly one kind, so
//! handlers mostly bubble [`WorkflowError`]s up with `?`.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lattice_runtime::WorkflowError;
use serde::Serialize;

/// A specialized [`Result`] type for HTTP handlers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error<'static>> = std::result::Result<T, E>;

/// The error type for HTTP handlers in the server.
#[must_use = "errors do nothing unless serialized"]
#[derive(Debug, Clone)]
pub struct Error<'a> {
    kind: ErrorKind,
    message: Option<Cow<'a, str>>,
    resource: Option<Cow<'a, str>>,
}

impl Error<'static> {
    /// Creates a new [`Error`] with the specified kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            resource: None,
        }
    }
}

impl<'a> Error<'a> {
    /// Sets a custom user-facing message.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Sets the resource that caused the error.
    #[inline]
    pub fn with_resource(self, resource: impl Into<Cow<'a, str>>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..self
        }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the custom message if present.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.kind.response();
        let message = self.message.as_deref().unwrap_or(response.message.as_ref());
        write!(f, "{} ({}): {}", response.name, response.status, message)?;
        if let Some(ref resource) = self.resource {
            write!(f, " [resource: {resource}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error<'_> {}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        let mut response = self.kind.response();
        if let Some(message) = self.message {
            response.message = Cow::Owned(message.into_owned());
        }
        if let Some(resource) = self.resource {
            response.resource = Some(Cow::Owned(resource.into_owned()));
        }
        response.into_response()
    }
}

impl From<ErrorKind> for Error<'static> {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<WorkflowError> for Error<'static> {
    fn from(error: WorkflowError) -> Self {
        let kind = match error {
            WorkflowError::EmptyGraph
            | WorkflowError::BlankNodeId { .. }
            | WorkflowError::DuplicateNodeId(_) => ErrorKind::UnprocessableEntity,
            WorkflowError::IdConflict(_) => ErrorKind::Conflict,
            WorkflowError::NotFound(_) => ErrorKind::NotFound,
        };
        kind.with_message(error.to_string()).with_resource("workflow")
    }
}

/// The HTTP error kinds this API can produce.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 Bad Request - unparsable request data.
    BadRequest,
    /// 404 Not Found - resource not found.
    NotFound,
    /// 409 Conflict - conflicting resource state.
    Conflict,
    /// 422 Unprocessable Entity - well-formed but invalid workflow body.
    UnprocessableEntity,
    /// 500 Internal Server Error - unexpected server error.
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Creates an [`Error`] with the specified message.
    #[inline]
    pub fn with_message<'a>(self, message: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_message(message)
    }

    /// Creates an [`Error`] with the specified resource.
    #[inline]
    pub fn with_resource<'a>(self, resource: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_resource(resource)
    }

    /// Returns the HTTP status code for this error kind.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        self.response().status
    }

    /// Returns the canned response body for this error kind.
    #[inline]
    pub fn response(self) -> ErrorResponse<'static> {
        match self {
            Self::BadRequest => ErrorResponse::BAD_REQUEST,
            Self::NotFound => ErrorResponse::NOT_FOUND,
            Self::Conflict => ErrorResponse::CONFLICT,
            Self::UnprocessableEntity => ErrorResponse::UNPROCESSABLE_ENTITY,
            Self::InternalServerError => ErrorResponse::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.response().name)
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}

/// Serialized error body.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier.
    pub name: &'static str,
    /// User-facing error message.
    pub message: Cow<'a, str>,
    /// The resource that the error relates to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// HTTP status code (conveyed by the response line, not the body).
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse<'static> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const UNPROCESSABLE_ENTITY: Self = Self::new(
        "validation_failed",
        "The submitted workflow failed validation",
        StatusCode::UNPROCESSABLE_ENTITY,
    );

    /// Creates a new canned [`ErrorResponse`].
    const fn new(name: &'static str, message: &'static str, status: StatusCode) -> Self {
        Self {
            name,
            message: Cow::Borrowed(message),
            resource: None,
            status,
        }
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        (self.status, axum::Json(&self)).into_response()
    }
}
