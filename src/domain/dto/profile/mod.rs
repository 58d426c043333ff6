//! 직원 프로필 DTO 모듈

pub mod request;
pub mod response;
