pub mod handlers;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::get,
    Router,
};
use serde_json::json;
use shelf_kernel::{InitCtx, Module};
use shelf_validation::Validator;

/// Book endpoints, mounted at `/book`
pub struct BooksModule {
    validator: Arc<Validator>,
}

impl BooksModule {
    pub fn new(validator: Arc<Validator>) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn mount_path(&self) -> String {
        "/book".to_string()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            schema = self.validator.schema().name(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/add",
                get(handlers::get_add_segment).post(handlers::add_book),
            )
            .route("/{id}", get(handlers::get_book))
            .with_state(Arc::clone(&self.validator))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_response = json!({
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        });
        let acknowledgment = json!({
            "text/plain": {
                "schema": { "type": "string" }
            }
        });

        Some(json!({
            "paths": {
                "/{id}": {
                    "get": {
                        "summary": "Fetch a book by id",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer", "format": "int64" }
                        }],
                        "responses": {
                            "200": { "description": "Acknowledgment", "content": acknowledgment },
                            "400": { "description": "id is not an integer", "content": error_response }
                        }
                    }
                },
                "/add": {
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookRecord" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Acknowledgment", "content": acknowledgment },
                            "400": { "description": "Body failed validation", "content": error_response }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "BookRecord": self.validator.schema().to_json_schema()
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create the books module with its validator wired in
pub fn create_module() -> Arc<dyn Module> {
    let validator = Arc::new(Validator::new(&models::BOOK_RECORD_SCHEMA));
    Arc::new(BooksModule::new(validator))
}
