//! # Diagnostics HTTP Handlers
//!
//! 운영 진단 엔드포인트(헬스체크, 에코)를 처리하는 핸들러 함수들입니다.
//!
//! 비즈니스 엔드포인트와 달리 본문은 **선택적이고 관대하게** 처리합니다.
//! 잘못된 JSON이나 제약 조건 위반은 debug 레벨로만 기록하고 요청을
//! 거부하지 않습니다 — 모니터링 프로브가 본문 형식 때문에 실패하면
//! 안 되기 때문입니다.

use actix_web::http::{header, StatusCode};
use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{debug, error, info};
use serde_json::json;

use crate::config::Environment;
use crate::core::errors::ApiError;
use crate::core::responses::json_response;
use crate::core::validation::read_and_validate;
use crate::domain::dto::diagnostics::request::{EchoRequest, HealthCheckRequest};

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 본문을 보낸 경우 `requestDetails`로 되돌려주고, 없으면 null입니다.
///
/// # 엔드포인트
///
/// `POST /HealthCheck`
///
/// # 응답
///
/// ```json
/// {
///   "status": "Healthy",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "service": "Employee Profile Service",
///   "version": "0.1.0",
///   "environment": "Production",
///   "requestDetails": {
///     "checkDatabase": true,
///     "includeMetrics": false,
///     "clientIdentifier": "ops-probe-1"
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/HealthCheck \
///   -H "Content-Type: application/json" \
///   -d '{"checkDatabase":true}'
/// ```
#[post("/HealthCheck")]
pub async fn health_check(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    info!("Health check request received.");

    let (request, violations) = read_and_validate::<HealthCheckRequest>(&body, false);
    if !violations.is_empty() {
        debug!(
            "HealthCheck optional body validation issues: {}",
            violations.join(", ")
        );
    }

    let health = json!({
        "status": "Healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "Employee Profile Service",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().name(),
        "requestDetails": request,
    });

    json_response(StatusCode::OK, &health).map_err(|e| {
        error!("Error during health check: {e}");
        ApiError::HealthCheck
    })
}

/// 에코 테스트 엔드포인트
///
/// 받은 페이로드를 그대로 되돌려주는 연결성 테스트용 엔드포인트입니다.
/// 본문이 없거나 잘못되어도 기본값으로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /Echo`
///
/// # 응답
///
/// ```json
/// {
///   "message": "Echo test successful",
///   "receivedAt": "2024-01-01T00:00:00+00:00",
///   "input": {
///     "name": "ping",
///     "value": 42,
///     "description": null
///   },
///   "contentType": "application/json"
/// }
/// ```
#[post("/Echo")]
pub async fn echo(request: HttpRequest, body: web::Bytes) -> Result<HttpResponse, ApiError> {
    info!("Echo test request received.");

    let (payload, violations) = read_and_validate::<EchoRequest>(&body, false);
    if !violations.is_empty() {
        debug!(
            "Echo optional body validation issues: {}",
            violations.join(", ")
        );
    }
    let payload = payload.unwrap_or_default();

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("Not specified");

    let echo = json!({
        "message": "Echo test successful",
        "receivedAt": Utc::now().to_rfc3339(),
        "input": {
            "name": payload.name,
            "value": payload.value,
            "description": payload.description,
        },
        "contentType": content_type,
    });

    json_response(StatusCode::OK, &echo).map_err(|e| {
        error!("Error processing echo request: {e}");
        ApiError::Echo
    })
}
