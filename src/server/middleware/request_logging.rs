//! Request logging middleware

use crate::utils::logging::format_duration;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::{error, info, warn};

use super::request_id::REQUEST_ID_HEADER;

/// Logs method, path, status and latency of every request
pub struct RequestLoggingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestLoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestLoggingMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggingMiddlewareService { service }))
    }
}

/// Service implementation for request logging middleware
pub struct RequestLoggingMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start_time = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("-")
            .to_string();

        info!(%request_id, "{} {} - Request received", method, path);

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = match fut.await {
                Ok(res) => res,
                Err(e) => {
                    error!(%request_id, "Error while processing {} {}: {}", method, path, e);
                    return Err(e);
                }
            };

            let status = res.status().as_u16();
            let duration = format_duration(start_time.elapsed());

            if res.status().is_server_error() {
                error!(%request_id, "{} {} completed with {} in {}", method, path, status, duration);
            } else if res.status().is_client_error() {
                warn!(%request_id, "{} {} completed with {} in {}", method, path, status, duration);
            } else {
                info!(%request_id, "{} {} completed with {} in {}", method, path, status, duration);
            }

            Ok(res)
        })
    }
}
