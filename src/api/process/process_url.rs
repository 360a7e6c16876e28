use crate::api::APIError;
use crate::models::*;
use crate::normalize::is_valid_url;
use actix_web::{http::Method, web, Either, HttpRequest, HttpResponse};

#[tracing::instrument(err, skip(req, body), fields(otel.kind = "internal"))]
pub async fn process_url_v1(
    req: HttpRequest,
    body: web::Bytes,
) -> Result<Either<HttpResponse, ProcessedUrlV1>, APIError> {
    match req.method() {
        &Method::POST => {}
        &Method::OPTIONS => return Ok(Either::Left(HttpResponse::Ok().finish())),
        _ => return Ok(Either::Left(HttpResponse::MethodNotAllowed().finish())),
    }

    if body.is_empty() {
        return Err(APIError::bad_request("Error : Request Body is empty"));
    }

    let request = NormalizationRequest::from_json(&body).map_err(|err| {
        debug!(exception.message = %err, "The request body could not be decoded");
        APIError::bad_request("Invalid request format")
    })?;

    if !is_valid_url(&request.url) {
        return Err(APIError::bad_request("Url format invalid"));
    }

    let operation: Operation = request.operation.parse().map_err(|err: UnknownOperation| {
        debug!(exception.message = %err, "The requested operation is not supported");
        APIError::bad_request("Invalid operation")
    })?;

    let processed = operation.apply(&request.url)?;
    info!(%operation, url = %request.url, processed_url = %processed, "Processed URL");

    Ok(Either::Right(processed.into()))
}
