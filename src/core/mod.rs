//! 핵심 공통 모듈
//!
//! 애플리케이션 전역에서 사용하는 에러 타입, 응답 직렬화,
//! 요청 본문 검증 파이프라인을 제공합니다.

pub mod errors;
pub mod responses;
pub mod validation;
