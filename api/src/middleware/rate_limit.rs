//! Per-IP rate limiting middleware
//!
//! Fixed-window counters kept in process memory, matching the
//! single-process deployment model of the session store. Each limiter
//! instance owns its own counters, so the general `/api` window and the
//! stricter MFA window are tracked independently.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    rc::Rc,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use pir_shared::types::response::ApiResponse;

/// Rate limiter middleware factory
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    counters: Arc<Mutex<HashMap<String, Window>>>,
}

#[derive(Clone, Copy)]
struct Window {
    count: u32,
    started_at: Instant,
}

impl RateLimiter {
    /// Create a limiter allowing `max_requests` per client IP per window
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            counters: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Record one request against a client's window, returning whether it is
/// still within the limit
fn check_rate_limit(
    counters: &Mutex<HashMap<String, Window>>,
    client_ip: &str,
    max_requests: u32,
    window: Duration,
) -> bool {
    let mut counters = counters.lock().unwrap();
    let now = Instant::now();
    let entry = counters.entry(client_ip.to_string()).or_insert(Window {
        count: 0,
        started_at: now,
    });

    if now.duration_since(entry.started_at) >= window {
        entry.count = 0;
        entry.started_at = now;
    }

    entry.count += 1;
    entry.count <= max_requests
}

/// Extract the client IP, honoring reverse-proxy headers
fn extract_client_ip(req: &ServiceRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window: self.window,
            counters: self.counters.clone(),
        }))
    }
}

/// Rate limiter middleware service implementation
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window: Duration,
    counters: Arc<Mutex<HashMap<String, Window>>>,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let client_ip = extract_client_ip(&req);
        let allowed = check_rate_limit(&self.counters, &client_ip, self.max_requests, self.window);

        if !allowed {
            log::warn!("Rate limit exceeded for IP: {client_ip}");
            let (request, _payload) = req.into_parts();
            let response = HttpResponse::TooManyRequests()
                .json(ApiResponse::<()>::failure(
                    "Too many requests from this IP, please try again later.",
                ))
                .map_into_right_body();
            return Box::pin(ready(Ok(ServiceResponse::new(request, response))));
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
