//! 도메인 모듈
//!
//! 와이어 계약을 구성하는 요청/응답 DTO들을 정의합니다.
//! 이 서비스는 자체적으로 엔티티를 영속화하지 않으며, 모든 데이터는
//! 요청 범위에서 생성되고 응답 직렬화와 함께 소멸합니다.

pub mod dto;
