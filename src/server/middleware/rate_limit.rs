//! Rate limiting middleware

use crate::core::rate_limiter::{RateLimitResult, RateLimiter};
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::HttpResponse;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client key used when the peer address is unavailable
const UNKNOWN_CLIENT: &str = "unknown";

/// Rate limiting key for a request: the peer IP address
pub fn client_key(req: &ServiceRequest) -> String {
    req.connection_info()
        .peer_addr()
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Rejects requests from clients that exceeded their sliding window budget
///
/// Rejected requests never reach the wrapped service.
pub struct RateLimitMiddleware {
    limiter: Arc<RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            limiter: Arc::clone(&self.limiter),
        }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
    limiter: Arc<RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let key = client_key(&req);
        let result = self.limiter.check_and_record(&key);

        if !result.allowed {
            warn!(
                client = %key,
                path = %req.path(),
                "Rate limit exceeded ({} requests per {}s)",
                result.limit,
                self.limiter.window().as_secs()
            );

            let mut response =
                HttpResponse::from_error(GatewayError::rate_limited(result.retry_after_secs));
            insert_rate_limit_headers(response.headers_mut(), &result);

            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        }

        debug!(client = %key, remaining = result.remaining, "Rate limit check passed");

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            insert_rate_limit_headers(res.headers_mut(), &result);
            Ok(res.map_into_left_body())
        })
    }
}

/// Expose the client's budget as `X-RateLimit-*` headers
pub(super) fn insert_rate_limit_headers(headers: &mut HeaderMap, result: &RateLimitResult) {
    headers.insert(
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderValue::from(result.limit),
    );
    headers.insert(
        HeaderName::from_static("x-ratelimit-remaining"),
        HeaderValue::from(result.remaining),
    );
    headers.insert(
        HeaderName::from_static("x-ratelimit-reset"),
        HeaderValue::from(result.reset_after_secs),
    );
}

