use std::sync::Arc;

use poem_openapi::types::ToJSON;
use poem_openapi::{ApiResponse, OpenApi, param::Query, payload::Json};
use serde_json::Value;
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreatedProductResponse, PostProductRequest, ProductResponse, PutProductRequest,
    parse_required_id,
};
use crate::api::tags::ApiTags;

/// Payload returned by `/Product/Get` when no product matches.
pub const NOT_FOUND_SENTINEL: &str = "NotFound";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in insertion order.
    #[oai(path = "/Product/GetAll", method = "get", tag = "ApiTags::Products")]
    async fn get_all(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await.into_result() {
            Ok(products) => GetAllProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(message) => {
                GetAllProductsResponse::InternalError(ErrorResponse::new("InternalError", message))
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns the product, or the JSON string `"NotFound"` when the id is
    /// missing, malformed, or unknown.
    #[oai(path = "/Product/Get", method = "get", tag = "ApiTags::Products")]
    async fn get(&self, id: Query<Option<String>>) -> GetProductResponse {
        let Some(id) = id.0.as_deref().and_then(|raw| Uuid::parse_str(raw.trim()).ok()) else {
            return GetProductResponse::Ok(Json(Value::String(NOT_FOUND_SENTINEL.to_string())));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
            .into_result()
        {
            Ok(Some(product)) => GetProductResponse::Ok(Json(
                ProductResponse::from(product).to_json().unwrap_or_default(),
            )),
            Ok(None) => GetProductResponse::Ok(Json(Value::String(NOT_FOUND_SENTINEL.to_string()))),
            Err(message) => {
                GetProductResponse::InternalError(ErrorResponse::new("InternalError", message))
            }
        }
    }

    /// Create a new product
    ///
    /// Returns the id assigned to the created product.
    #[oai(path = "/Product/Post", method = "post", tag = "ApiTags::Products")]
    async fn post(&self, body: Json<PostProductRequest>) -> PostProductResponse {
        let request = body.0;
        if let Err(err) = request.validate() {
            let (_status, json) = err.into_error_response();
            return PostProductResponse::BadRequest(json);
        }

        let params = CreateProductParams {
            title: request.title,
            unit_price: request.unit_price,
        };

        match self.create_use_case.execute(params).await.into_result() {
            Ok(id) => PostProductResponse::Ok(Json(CreatedProductResponse { id: id.to_string() })),
            Err(message) => {
                PostProductResponse::BadRequest(ErrorResponse::new("CreateFailed", message))
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the title and unit price of the product named by `id`.
    #[oai(path = "/Product/Put", method = "put", tag = "ApiTags::Products")]
    async fn put(&self, body: Json<PutProductRequest>) -> PutProductResponse {
        let request = body.0;
        let id = match request.validate() {
            Ok(id) => id,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return PutProductResponse::BadRequest(json);
            }
        };

        let params = UpdateProductParams {
            id,
            title: request.title,
            unit_price: request.unit_price,
        };

        match self.update_use_case.execute(params).await.into_result() {
            Ok(()) => PutProductResponse::Ok,
            Err(message) => PutProductResponse::NotFound(ErrorResponse::new("NotFound", message)),
        }
    }

    /// Delete a product
    ///
    /// Permanently removes the product named by `id`.
    #[oai(path = "/Product/Delete", method = "delete", tag = "ApiTags::Products")]
    async fn delete(&self, id: Query<Option<String>>) -> DeleteProductResponse {
        let id = match parse_required_id(id.0.as_deref()) {
            Ok(id) => id,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return DeleteProductResponse::BadRequest(json);
            }
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
            .into_result()
        {
            Ok(()) => DeleteProductResponse::Ok,
            Err(message) => {
                DeleteProductResponse::NotFound(ErrorResponse::new("NotFound", message))
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductResponse {
    /// The product, or the string "NotFound"
    #[oai(status = 200)]
    Ok(Json<Value>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum PostProductResponse {
    #[oai(status = 200)]
    Ok(Json<CreatedProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum PutProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::product::create::CreateProductUseCaseImpl;
    use business::application::product::delete::DeleteProductUseCaseImpl;
    use business::application::product::get_all::GetAllProductsUseCaseImpl;
    use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use business::application::product::update::UpdateProductUseCaseImpl;
    use business::domain::logger::Logger;
    use business::domain::product::repository::ProductRepository;
    use logger::TracingLogger;
    use persistence::product::memory::InMemoryProductRepository;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn test_client() -> TestClient<Route> {
        let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        );

        TestClient::new(Route::new().nest(
            "/",
            OpenApiService::new(api, "Product Catalog API", "test"),
        ))
    }

    async fn create(cli: &TestClient<Route>, title: &str, price: f64) -> String {
        let resp = cli
            .post("/Product/Post")
            .body_json(&json!({ "title": title, "unitPrice": price }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    async fn get_json(cli: &TestClient<Route>, id: &str) -> Value {
        let resp = cli.get("/Product/Get").query("id", &id).send().await;
        resp.assert_status_is_ok();
        resp.0.into_body().into_json().await.unwrap()
    }

    async fn list_json(cli: &TestClient<Route>) -> Vec<Value> {
        let resp = cli.get("/Product/GetAll").send().await;
        resp.assert_status_is_ok();
        resp.0.into_body().into_json().await.unwrap()
    }

    #[tokio::test]
    async fn should_create_then_read_back_product() {
        let cli = test_client();

        let id = create(&cli, "Widget", 9.99).await;
        let product = get_json(&cli, &id).await;

        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(product, json!({ "id": id, "title": "Widget", "unitPrice": 9.99 }));
    }

    #[tokio::test]
    async fn should_assign_distinct_ids() {
        let cli = test_client();

        let first = create(&cli, "Widget", 9.99).await;
        let second = create(&cli, "Widget", 9.99).await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_without_creating() {
        let cli = test_client();

        let empty_title = cli
            .post("/Product/Post")
            .body_json(&json!({ "title": "  ", "unitPrice": 3.0 }))
            .send()
            .await;
        empty_title.assert_status(StatusCode::BAD_REQUEST);

        let zero_price = cli
            .post("/Product/Post")
            .body_json(&json!({ "title": "Widget", "unitPrice": 0 }))
            .send()
            .await;
        zero_price.assert_status(StatusCode::BAD_REQUEST);

        let sub_cent_price = cli
            .post("/Product/Post")
            .body_json(&json!({ "title": "Widget", "unitPrice": 0.004 }))
            .send()
            .await;
        sub_cent_price.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = sub_cent_price.0.into_body().into_json().await.unwrap();
        assert_eq!(
            body["message"],
            json!("Unit price must have at most two decimal places.")
        );

        assert!(list_json(&cli).await.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_sentinel_for_unknown_id() {
        let cli = test_client();

        let body = get_json(&cli, &Uuid::new_v4().to_string()).await;

        assert_eq!(body, json!("NotFound"));
    }

    #[tokio::test]
    async fn should_reject_put_with_nil_id() {
        let cli = test_client();
        create(&cli, "Widget", 9.99).await;

        let resp = cli
            .put("/Product/Put")
            .body_json(&json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "title": "x",
                "unitPrice": 1
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["message"], json!("Product ID is required."));
        assert_eq!(list_json(&cli).await[0]["title"], json!("Widget"));
    }

    #[tokio::test]
    async fn should_return_404_when_updating_unknown_product() {
        let cli = test_client();
        let id = create(&cli, "Widget", 9.99).await;

        let resp = cli
            .put("/Product/Put")
            .body_json(&json!({ "id": Uuid::new_v4().to_string(), "title": "x", "unitPrice": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["message"], json!("Product not found."));
        assert_eq!(get_json(&cli, &id).await["title"], json!("Widget"));
    }

    #[tokio::test]
    async fn should_update_existing_product() {
        let cli = test_client();
        let id = create(&cli, "Widget", 9.99).await;

        let resp = cli
            .put("/Product/Put")
            .body_json(&json!({ "id": id, "title": "Gadget", "unitPrice": 12.5 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        assert_eq!(
            get_json(&cli, &id).await,
            json!({ "id": id, "title": "Gadget", "unitPrice": 12.5 })
        );
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_unknown_product() {
        let cli = test_client();

        let resp = cli
            .delete("/Product/Delete")
            .query("id", &Uuid::new_v4().to_string())
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_delete_without_id() {
        let cli = test_client();

        let resp = cli.delete("/Product/Delete").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_product_and_shrink_listing() {
        let cli = test_client();
        let first = create(&cli, "First", 1.0).await;
        create(&cli, "Second", 2.0).await;
        create(&cli, "Third", 3.0).await;

        let resp = cli.delete("/Product/Delete").query("id", &first).send().await;
        resp.assert_status_is_ok();

        assert_eq!(get_json(&cli, &first).await, json!("NotFound"));
        let remaining = list_json(&cli).await;
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0]["title"], json!("Second"));
        assert_eq!(remaining[1]["title"], json!("Third"));
    }
}
