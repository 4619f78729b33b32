//! Global middleware shared by every route.
//!
//! Order on the app, outermost first:
//! 1. `Logger` access log (actix)
//! 2. [`recover`] turns a panicking handler into a 500
//! 3. [`track_in_flight`] counts requests for the shutdown drain

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::{Logger, Next},
    web, Error,
};
use futures_util::FutureExt;
use tokio::sync::Notify;

use crate::types::error::AppError;

pub fn request_logger() -> Logger {
    Logger::new(r#"%a "%r" %s %b %Dms"#)
}

pub async fn recover(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();
    let path = req.path().to_string();

    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(res) => res,
        Err(panic) => {
            tracing::error!(
                method = %method,
                path = %path,
                panic = %panic_message(panic.as_ref()),
                "Handler panicked"
            );
            Err(AppError::Internal("handler panicked".into()).into())
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic>"
    }
}

/// Number of requests currently inside the app.
#[derive(Debug, Default)]
pub struct InFlight {
    active: AtomicUsize,
    idle: Notify,
}

pub struct InFlightGuard<'a> {
    tracker: &'a InFlight,
}

impl InFlight {
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn enter(&self) -> InFlightGuard<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        InFlightGuard { tracker: self }
    }

    /// Resolves once no request is in flight.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            if self.active() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.tracker.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tracker.idle.notify_waiters();
        }
    }
}

pub async fn track_in_flight(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    match req.app_data::<web::Data<InFlight>>().cloned() {
        Some(tracker) => {
            let _guard = tracker.enter();
            next.call(req).await
        }
        None => next.call(req).await,
    }
}
