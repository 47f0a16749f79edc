use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::categories::CategoryDto;
use crate::dto::response::ApiResponse;
use crate::forms::categories::{
    AddCategoryFormPayload, CategoryDetailsFormPayload, DeleteCategoryFormPayload,
    UpdateCategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{request_parts, service_error_response};
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    show_category_details as show_category_details_service,
    update_category as update_category_service,
};

#[post("/createCategory")]
pub async fn create_category(
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload: AddCategoryFormPayload = match parts.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match create_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(ApiResponse::data_with_message(
            "new category created",
            CategoryDto::from(category),
        )),
        Err(err) => service_error_response(err),
    }
}

#[get("/categoryDetails")]
pub async fn show_category_details(
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload: CategoryDetailsFormPayload = match parts.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match show_category_details_service(payload, repo.get_ref()) {
        Ok(details) => HttpResponse::Ok().json(ApiResponse::data(details)),
        Err(err) => service_error_response(err),
    }
}

#[put("/updateCategory/{category_id}")]
pub async fn update_category(
    category_id: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload = match UpdateCategoryFormPayload::from_request(category_id.into_inner(), parts)
    {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match update_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(ApiResponse::data_with_message(
            "category updated successfully",
            CategoryDto::from(category),
        )),
        Err(err) => service_error_response(err),
    }
}

#[delete("/deleteCategory/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let parts = match request_parts(query, &body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let payload = match DeleteCategoryFormPayload::from_request(category_id.into_inner(), parts)
    {
        Ok(payload) => payload,
        Err(e) => return service_error_response(e.into()),
    };

    match delete_category_service(payload, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("category successfully deleted")),
        Err(err) => service_error_response(err),
    }
}
