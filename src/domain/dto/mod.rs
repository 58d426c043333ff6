//! 데이터 전송 객체 (DTO) 모듈
//!
//! - [`profile`] - 직원 프로필 검증/갱신 요청 및 응답
//! - [`diagnostics`] - 헬스체크/에코 진단 요청
//!
//! 필드 이름은 와이어 계약의 일부입니다. 직원 식별 필드는 snake_case,
//! 진단 요청과 모든 응답은 lower camelCase를 사용합니다.

pub mod diagnostics;
pub mod profile;
