use actix_service::{forward_ready, Service, Transform};
use actix_web::{
    body::{self, BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

pub fn init(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}

/// Logs every request on arrival and every response once it has been produced.
///
/// The response body is buffered so that it can be included in the log line, and
/// is then handed on unchanged along with the original status and headers.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let peer = req
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "-".to_string());
        info!("Request : {} {} {}", peer, req.method(), req.path());

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let (req, res) = service.call(req).await?.into_parts();
            let (res, body) = res.into_parts();

            let body = body::to_bytes(body).await.map_err(|err| {
                let err: Box<dyn std::error::Error> = err.into();
                ErrorInternalServerError(err.to_string())
            })?;

            info!(
                "Response : {} {} {}",
                peer,
                res.status().as_u16(),
                String::from_utf8_lossy(&body)
            );

            Ok(ServiceResponse::new(req, res.set_body(BoxBody::new(body))))
        })
    }
}
