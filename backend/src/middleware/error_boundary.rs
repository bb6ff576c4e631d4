//! Catch-all middleware for failures that escape the handler pipeline.
//!
//! Handlers report expected failures through the domain error envelope. This
//! boundary covers the rest: panics and errors surfaced by inner services as
//! `Err`. Both become a JSON [`UnhandledError`] response; the full detail is
//! logged and never leaves the process for server-side failures.

use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

const SANITIZED_MESSAGE: &str = "An unexpected error occurred";

/// Body returned for failures caught by [`ErrorBoundary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnhandledError {
    pub status_code: u16,
    pub message: String,
    pub detail: Option<String>,
}

impl UnhandledError {
    /// Validation failures (400 and 422) keep their message; everything
    /// else, including other 4xx statuses, is a 500 with a fixed message.
    fn from_failure(status: StatusCode, message: String) -> Self {
        if is_validation_failure(status) {
            Self {
                status_code: StatusCode::BAD_REQUEST.as_u16(),
                message: message.clone(),
                detail: Some(message),
            }
        } else {
            Self {
                status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                message: SANITIZED_MESSAGE.to_owned(),
                detail: None,
            }
        }
    }

    fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

fn is_validation_failure(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY
    )
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

/// Error boundary middleware.
///
/// Wrap it inside [`crate::Correlation`] so caught failures are logged under
/// the request's correlation identifier.
#[derive(Clone)]
pub struct ErrorBoundary;

impl<S, B> Transform<S, ServiceRequest> for ErrorBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorBoundaryMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorBoundaryMiddleware { service }))
    }
}

/// Service wrapper produced by [`ErrorBoundary`].
pub struct ErrorBoundaryMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorBoundaryMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req: HttpRequest = req.request().clone();
        let fut = match std::panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req))) {
            Ok(fut) => fut,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                return Box::pin(async move { Ok(caught_panic(http_req, &message)) });
            }
        };

        Box::pin(async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(res)) => Ok(res.map_into_left_body()),
                Ok(Err(err)) => {
                    let status = err.as_response_error().status_code();
                    let message = err.to_string();
                    if is_validation_failure(status) {
                        warn!(status = status.as_u16(), %message, "request rejected");
                    } else {
                        error!(status = status.as_u16(), %message, "unhandled request error");
                    }
                    let body = UnhandledError::from_failure(status, message);
                    Ok(ServiceResponse::new(http_req, body.into_response()).map_into_right_body())
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    Ok(caught_panic(http_req, &message))
                }
            }
        })
    }
}

fn caught_panic<B>(http_req: HttpRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    error!(panic = message, "request handler panicked");
    let body = UnhandledError::from_failure(StatusCode::INTERNAL_SERVER_ERROR, message.to_owned());
    ServiceResponse::new(http_req, body.into_response()).map_into_right_body()
}
