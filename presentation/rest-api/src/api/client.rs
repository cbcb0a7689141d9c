use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the catalog page; its script and stylesheet come from `/static`.
pub struct ClientApi;

#[OpenApi]
impl ClientApi {
    /// Catalog page
    #[oai(path = "/", method = "get", tag = "ApiTags::Client")]
    async fn root(&self) -> Html<&'static str> {
        Html(INDEX_HTML)
    }

    /// Catalog page
    #[oai(path = "/Product/Index", method = "get", tag = "ApiTags::Client")]
    async fn index(&self) -> Html<&'static str> {
        Html(INDEX_HTML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_serve_catalog_page() {
        let cli = TestClient::new(
            Route::new().nest("/", OpenApiService::new(ClientApi, "Client", "test")),
        );

        let resp = cli.get("/Product/Index").send().await;

        resp.assert_status_is_ok();
        resp.assert_content_type("text/html; charset=utf-8");
        let body = resp.0.into_body().into_string().await.unwrap();
        assert!(body.contains("productTableBody"));
    }
}
