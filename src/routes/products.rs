use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::products::ProductDto;
use crate::dto::response::ApiResponse;
use crate::forms::products::{
    AddProductFormPayload, DeleteProductFormPayload, ListProductsFormPayload,
    UpdateProductFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{request_parts, service_error_response};
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    show_products as show_products_service, update_product as update_product_service,
};

#[post("/createProduct")]
pub async fn create_product(
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload: AddProductFormPayload = match parts.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match create_product_service(payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(ApiResponse::data_with_message(
            "new product created",
            ProductDto::from(product),
        )),
        Err(err) => service_error_response(err),
    }
}

#[get("/productDetails")]
pub async fn show_products(
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload: ListProductsFormPayload = match parts.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match show_products_service(payload, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::data(
            products
                .into_iter()
                .map(ProductDto::from)
                .collect::<Vec<ProductDto>>(),
        )),
        Err(err) => service_error_response(err),
    }
}

#[put("/updateProduct/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload = match UpdateProductFormPayload::from_request(product_id.into_inner(), parts) {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match update_product_service(payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::data_with_message(
            "product updated successfully",
            ProductDto::from(product),
        )),
        Err(err) => service_error_response(err),
    }
}

#[delete("/deleteProduct/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload = match DeleteProductFormPayload::from_request(product_id.into_inner(), parts) {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match delete_product_service(payload, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("product successfully deleted")),
        Err(err) => service_error_response(err),
    }
}
