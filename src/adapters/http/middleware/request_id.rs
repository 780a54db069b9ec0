use actix_web::{
  Error, HttpMessage,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use tracing::Instrument;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every request with an id
///
/// A well-formed UUID in an incoming `X-Request-ID` header is kept, otherwise
/// a fresh v4 id is generated. The id is stored in request extensions, wraps
/// the rest of the pipeline in a `request` tracing span, and is echoed back
/// in the `X-Request-ID` response header.
#[derive(Debug, Clone, Default)]
pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestIdMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestIdMiddlewareService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequestIdMiddlewareService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    let request_id = req
      .headers()
      .get(REQUEST_ID_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| Uuid::parse_str(value).ok())
      .map(RequestId)
      .unwrap_or_default();

    req.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
      "request",
      request_id = %request_id,
      method = %req.method(),
      path = %req.path(),
    );

    Box::pin(
      async move {
        let mut res = service.call(req).await?;

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
          res
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        Ok(res)
      }
      .instrument(span),
    )
  }
}

/// Request id stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for RequestId {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Display for RequestId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Extension trait to read the request id from a request
pub trait RequestIdExt {
  /// Returns None if the middleware is not installed
  fn request_id(&self) -> Option<RequestId>;
}

impl RequestIdExt for actix_web::HttpRequest {
  fn request_id(&self) -> Option<RequestId> {
    self.extensions().get::<RequestId>().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpResponse,
    test::{self, TestRequest},
    web,
  };

  async fn echo_id(req: actix_web::HttpRequest) -> HttpResponse {
    let request_id = req.request_id().expect("request id should be set");
    HttpResponse::Ok().body(request_id.to_string())
  }

  #[actix_web::test]
  async fn test_request_id_generated() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_id)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    let header = resp
      .headers()
      .get("x-request-id")
      .expect("header should be present")
      .to_str()
      .unwrap()
      .to_string();
    assert!(Uuid::parse_str(&header).is_ok());

    let body = test::read_body(resp).await;
    assert_eq!(body, header.as_bytes());
  }

  #[actix_web::test]
  async fn test_incoming_request_id_is_kept() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_id)),
    )
    .await;
    let incoming = Uuid::new_v4().to_string();

    let req = TestRequest::get()
      .uri("/")
      .insert_header(("X-Request-ID", incoming.as_str()))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
      resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
      incoming
    );
  }

  #[actix_web::test]
  async fn test_malformed_incoming_request_id_is_replaced() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(echo_id)),
    )
    .await;

    let req = TestRequest::get()
      .uri("/")
      .insert_header(("X-Request-ID", "not-a-uuid"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_ne!(header, "not-a-uuid");
    assert!(Uuid::parse_str(header).is_ok());
  }

  #[test]
  fn test_request_id_uniqueness() {
    assert_ne!(RequestId::new(), RequestId::new());
  }
}
