use std::collections::HashMap;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::response::ApiResponse;
use crate::forms::RequestParts;
use crate::services::ServiceError;

pub mod categories;
pub mod products;

/// Register every catalog endpoint on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ApiResponse::failure(err.to_string()));
        InternalError::from_response(err, response).into()
    }))
    .service(categories::create_category)
    .service(categories::show_category_details)
    .service(categories::update_category)
    .service(categories::delete_category)
    .service(products::create_product)
    .service(products::show_products)
    .service(products::update_product)
    .service(products::delete_product);
}

/// Fallback for paths no endpoint matches.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("route not found"))
}

/// Collect the query map and the JSON body of a request.
fn request_parts(
    query: web::Query<HashMap<String, String>>,
    body: &web::Bytes,
) -> Result<RequestParts, HttpResponse> {
    RequestParts::new(query.into_inner(), body).map_err(|e| service_error_response(e.into()))
}

/// Map a service failure onto its status code and envelope.
fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(message))
        }
        ServiceError::NotFound(message) => {
            HttpResponse::NotFound().json(ApiResponse::failure(message))
        }
        ServiceError::Internal(error) => {
            HttpResponse::InternalServerError().json(ApiResponse::internal(error))
        }
    }
}
