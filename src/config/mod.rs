//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 데이터베이스 연결 문자열, 서버, 환경 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(연결 문자열)는 환경 변수로만 제공
//! - 연결 문자열은 요청마다 다시 읽음 (재시작 없이 교체 가능)
//! - 누락된 연결 문자열은 패닉이 아니라 요청 단위 설정 에러로 처리

pub mod app_config;

pub use app_config::{Environment, ServerConfig, SqlConfig};
