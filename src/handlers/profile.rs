//! # Employee Profile HTTP Handlers
//!
//! 직원 프로필 검증/갱신 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 두 핸들러 모두 실제 작업은 `EmployeeProfileService`에 위임하고,
//! 성공 응답의 직렬화와 상태 코드 결정만 담당합니다.
//!
//! 에러 응답은 `ApiError`의 `ResponseError` 구현이 일괄 생성하므로
//! 핸들러는 `?`로 전파만 하면 됩니다.

use actix_web::{http::StatusCode, post, web, HttpResponse};
use log::{error, info};

use crate::core::errors::ApiError;
use crate::core::responses::json_response;
use crate::services::profile::EmployeeProfileService;

/// 직원 프로필 검증 핸들러
///
/// 요청 본문을 검증한 뒤 `dbo.ValidateEmployeeProfile` 저장 프로시저를
/// 호출하고 결과를 반환합니다. 프로시저가 `isValid: false`를 보고해도
/// 호출 자체는 성공이므로 HTTP 200으로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /ValidateEmployeeProfile`
///
/// # 요청 본문
///
/// ```json
/// {
///   "employee_id": "E12345",
///   "first_name": "Jane",
///   "last_name": "Doe"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "isValid": true,
///   "validationMessage": "Employee profile is valid"
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "errorMessage": "employee_id: is required and must be between 1 and 64 characters",
///   "errorCode": 2001
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/ValidateEmployeeProfile \
///   -H "Content-Type: application/json" \
///   -d '{"employee_id":"E12345","first_name":"Jane","last_name":"Doe"}'
/// ```
#[post("/ValidateEmployeeProfile")]
pub async fn validate_employee_profile(
    service: web::Data<EmployeeProfileService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    info!("Employee profile validation request received.");

    let response = service.validate_profile(&body).await?;

    json_response(StatusCode::OK, &response).map_err(|e| {
        error!("Failed to serialize validation response: {e}");
        ApiError::Unexpected
    })
}

/// 직원 프로필 갱신 핸들러
///
/// `dbo.UpdateEmployeeProfile` 저장 프로시저를 호출하여 부서, 직함,
/// 주소를 갱신합니다. 생략된 선택 필드는 SQL NULL로 전달되어
/// 해당 컬럼을 변경하지 않습니다. 0행 갱신도 정상 성공(200)입니다.
///
/// # 엔드포인트
///
/// `POST /UpdateEmployeeProfile`
///
/// # 요청 본문
///
/// ```json
/// {
///   "employee_id": "E12345",
///   "department": "Finance",
///   "job_title": "Senior Analyst",
///   "address": "123 Main St"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "message": "Profile updated",
///   "rowsUpdated": 1
/// }
/// ```
///
/// ## 제약 조건 위반 (400 Bad Request)
/// ```json
/// {
///   "errorMessage": "Data constraint violation",
///   "errorCode": 3003
/// }
/// ```
#[post("/UpdateEmployeeProfile")]
pub async fn update_employee_profile(
    service: web::Data<EmployeeProfileService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    info!("Employee update request received.");

    let response = service.update_profile(&body).await?;

    json_response(StatusCode::OK, &response).map_err(|e| {
        error!("Failed to serialize update response: {e}");
        ApiError::Unexpected
    })
}
