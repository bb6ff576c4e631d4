//! Middleware tagging every request with a correlation identifier.
//!
//! The identifier is taken from the inbound `X-Correlation-Id` header when it
//! carries a usable value and generated otherwise. It is held in task-local
//! storage for the duration of the request, attached to an `http_request`
//! span, and echoed on the response.
//!
//! Tokio task-locals are not inherited by spawned tasks. Use
//! [`CorrelationId::scope`] when moving work onto another task.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info, info_span};

use crate::domain::{CORRELATION_ID_HEADER, CorrelationId};

/// Correlation middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use wordbook::Correlation;
///
/// let app = App::new().wrap(Correlation);
/// ```
#[derive(Clone)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

/// Service wrapper produced by [`Correlation`].
pub struct CorrelationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let inbound = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        let correlation_id = CorrelationId::from_inbound(inbound);
        let span = info_span!(
            "http_request",
            correlation_id = %correlation_id,
            method = %req.method(),
            path = %req.path(),
        );
        let fut = span.in_scope(|| {
            CorrelationId::sync_scope(correlation_id.clone(), || self.service.call(req))
        });
        let scoped_id = correlation_id.clone();

        Box::pin(
            CorrelationId::scope(scoped_id, async move {
                let mut res = fut.await?;
                info!(status = res.status().as_u16(), "request completed");
                match HeaderValue::from_str(correlation_id.as_str()) {
                    Ok(value) => {
                        res.headers_mut().insert(
                            HeaderName::from_static("x-correlation-id"),
                            value,
                        );
                    }
                    Err(error) => {
                        error!(%error, "failed to encode correlation identifier header");
                    }
                }
                Ok(res)
            })
            .instrument(span),
        )
    }
}
