//! 비즈니스 로직 계층
//!
//! 요청당 상태 기계(설정 확인 → 본문 검증 → 저장 프로시저 호출 →
//! 결과 변환)를 구현합니다.

pub mod profile;
