//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (HR Portal, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 저장 프로시저 호출                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 본문 처리 방식
//!
//! 모든 엔드포인트는 `web::Json` 추출기 대신 원시 `web::Bytes`를 받습니다.
//! 추출기는 첫 번째 역직렬화 실패에서 멈추지만, 이 서비스의 계약은
//! **모든** 제약 조건 위반을 수집해 한 번에 보고하는 것이기 때문입니다.
//! 파싱과 검증은 `core::validation::read_and_validate`가 담당합니다.
//!
//! ## 모듈 구성
//!
//! - **`profile`**: 직원 프로필 비즈니스 엔드포인트
//!   - 프로필 검증 (`POST /ValidateEmployeeProfile`)
//!   - 프로필 갱신 (`POST /UpdateEmployeeProfile`)
//!
//! - **`diagnostics`**: 운영 진단 엔드포인트
//!   - 헬스체크 (`POST /HealthCheck`)
//!   - 에코 테스트 (`POST /Echo`)

pub mod diagnostics;
pub mod profile;
