//! API 라우트 설정 모듈
//!
//! 직원 프로필 엔드포인트와 진단 엔드포인트를 애플리케이션에
//! 등록합니다. 네 엔드포인트 모두 루트 경로에 POST로 노출되며
//! 경로 이름은 기존 클라이언트와의 호환을 위해 PascalCase입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Available Routes
///
/// ## 직원 프로필
/// - `POST /ValidateEmployeeProfile` - 프로필 검증
/// - `POST /UpdateEmployeeProfile` - 프로필 갱신
///
/// ## 진단
/// - `POST /HealthCheck` - 서비스 상태 확인
/// - `POST /Echo` - 연결성 테스트
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_profile_routes(cfg);
    configure_diagnostics_routes(cfg);
}

/// 직원 프로필 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/ValidateEmployeeProfile \
///   -H "Content-Type: application/json" \
///   -d '{"employee_id":"E12345","first_name":"Jane","last_name":"Doe"}'
/// ```
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::profile::validate_employee_profile)
        .service(handlers::profile::update_employee_profile);
}

/// 진단 관련 라우트를 설정합니다
fn configure_diagnostics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::diagnostics::health_check)
        .service(handlers::diagnostics::echo);
}
