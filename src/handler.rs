//! Request acknowledgement handler.

use aws_lambda_events::encodings::Body;
use lamedh_http::{
    http::StatusCode,
    lambda::{Context, Error},
    Request, Response,
};
use log::info;

/// Acknowledges an incoming API Gateway request with `200 OK!`.
///
/// The request and its invocation context are rendered into a single
/// diagnostic record and otherwise left uninspected. No input changes
/// the response; the error arm of the result only satisfies the
/// runtime's calling convention.
pub async fn handle_request(request: Request, context: Context) -> Result<Response<Body>, Error> {
    info!("received request {:?} with context {:?}", request, context);
    let response = Response::builder()
        .status(StatusCode::OK)
        .body(Body::from("OK!"))?;
    Ok(response)
}
