use actix_web::{web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};
use serde_json::json;
use std::time::Instant;
use uuid::Uuid;

use crate::models::OrderForm;
use crate::shopify::{CreateOrderOutcome, OrderEnvelope};

use super::form::ORDER_FORM_HTML;
use super::AppState;

// ============================================================================
// Request Handlers
// ============================================================================
//
// Form-Serve:   GET /  -> the static order form
// Order-Submit: POST / -> map flat fields to the upstream payload, relay,
//               translate the outcome into the caller response
// Anything else on / is answered with 405.
//
// ============================================================================

pub async fn serve_form(state: web::Data<AppState>) -> impl Responder {
    state.metrics.record_form_served();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(ORDER_FORM_HTML)
}

pub async fn submit_order(
    state: web::Data<AppState>,
    form: web::Json<OrderForm>,
) -> impl Responder {
    let correlation_id = Uuid::new_v4();
    let envelope = OrderEnvelope::from(form.into_inner());

    let started = Instant::now();
    let result = state.client.create_order(&envelope, correlation_id).await;
    let duration = started.elapsed().as_secs_f64();

    match result {
        Ok(CreateOrderOutcome::Created(order)) => {
            state.metrics.record_relay("created", duration);
            HttpResponse::Ok().json(json!({
                "message": "Order placed successfully!",
                "order": order,
            }))
        }
        Ok(CreateOrderOutcome::Rejected(errors)) => {
            state.metrics.record_relay("rejected", duration);
            HttpResponse::BadRequest().json(json!({
                "message": "Error creating order",
                "errors": errors,
            }))
        }
        Err(error) => {
            state.metrics.record_relay("failed", duration);
            tracing::error!(
                correlation_id = %correlation_id,
                error = %error,
                "Order relay failed"
            );
            HttpResponse::InternalServerError().json(json!({
                "message": "Error creating order",
                "error": error.to_string(),
            }))
        }
    }
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(json!({
        "message": "Method not allowed..",
    }))
}

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "order-relay",
    }))
}

pub async fn metrics_handler(state: web::Data<AppState>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::server::routes;
    use crate::shopify::ShopifyClient;
    use actix_web::http::header;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_state(orders_url: String) -> web::Data<AppState> {
        web::Data::new(AppState {
            client: ShopifyClient::new(orders_url, "test-token".to_string()),
            metrics: Arc::new(Metrics::default()),
        })
    }

    fn sample_order() -> Value {
        json!({
            "name": "Jane Doe",
            "phone": "555-1111",
            "address": "1 Main St",
            "province": "Ontario",
            "variantId": "9991",
            "productTitle": "Widget",
            "quantity": 2,
            "price": "19.99",
            "deliveryMethod": "Standard",
            "shipmentPrice": "5.00"
        })
    }

    fn request_complete(raw: &[u8]) -> bool {
        let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&raw[..header_end]);
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    /// One-shot upstream stand-in: accepts a single connection, drains the
    /// request, answers 200 with the given JSON body.
    async fn spawn_upstream(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut received = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if request_complete(&received) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/admin/api/2024-01/orders.json")
    }

    #[actix_web::test]
    async fn test_serve_form_returns_html() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1/orders.json".to_string()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("orderForm"));
    }

    #[actix_web::test]
    async fn test_unsupported_method_is_405() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1/orders.json".to_string()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::delete().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 405);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Method not allowed..");
    }

    #[actix_web::test]
    async fn test_submit_relays_created_order() {
        let upstream_body = r##"{"order":{"id":450789469,"name":"#1001"}}"##;
        let url = spawn_upstream(upstream_body).await;

        let app = test::init_service(App::new().app_data(test_state(url)).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(sample_order())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Order placed successfully!");
        // The upstream body is relayed verbatim under `order`
        assert_eq!(
            body["order"],
            serde_json::from_str::<Value>(upstream_body).unwrap()
        );
    }

    #[actix_web::test]
    async fn test_submit_translates_upstream_rejection() {
        let upstream_body = r#"{"errors":{"line_items":["expected Array to be a Hash"]}}"#;
        let url = spawn_upstream(upstream_body).await;

        let app = test::init_service(App::new().app_data(test_state(url)).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(sample_order())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Error creating order");
        assert_eq!(body["errors"], json!({"line_items": ["expected Array to be a Hash"]}));
    }

    #[actix_web::test]
    async fn test_submit_transport_failure_is_500() {
        // Nothing listens on port 1, so the relay fails at connect
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1/orders.json".to_string()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(sample_order())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Error creating order");
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1/orders.json".to_string()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_exposes_counters() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1/orders.json".to_string()))
                .configure(routes),
        )
        .await;

        // Serve the form once so the counter is non-zero
        let req = test::TestRequest::get().uri("/").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("forms_served_total 1"));
    }
}
