//! 진단 엔드포인트 DTO 모듈

pub mod request;
