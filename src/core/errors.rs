//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 핸들러 경계에서
//! `{errorMessage, errorCode}` JSON 본문과 대응되는 HTTP 상태 코드로
//! 변환되며, 에러 코드 네임스페이스는 클라이언트와의 계약이므로
//! 변경하면 안 됩니다.
//!
//! | 에러 코드 | 의미 | HTTP 상태 |
//! |---|---|---|
//! | 1001 | 설정 오류 (연결 문자열 누락) | 500 |
//! | 2001 | 요청 본문 검증 실패 | 400 |
//! | 3000-3009 | 데이터베이스 오류 (번역 테이블 참조) | 가변 |
//! | 4001 | 요청 취소 | 408 |
//! | 5000 | 예기치 못한 오류 | 500 |
//! | 6001 | 헬스체크 실패 | 500 |
//! | 9999 | 에코 실패 | 500 |

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::core::responses::json_response;
use crate::domain::dto::profile::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 파이프라인의 모든 종단(terminal) 실패를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 연결 문자열 미설정 (코드 1001, 500)
    #[error("Database configuration error")]
    Configuration,

    /// 요청 본문 검증 실패, 위반 사항 전체가 " | "로 합쳐짐 (코드 2001, 400)
    #[error("{0}")]
    Validation(String),

    /// 데이터베이스 오류, 번역 테이블이 결정한 (메시지, 코드, 상태) 그대로 전달
    #[error("{message}")]
    Database {
        message: String,
        code: i32,
        status: u16,
    },

    /// 요청 취소 (코드 4001, 408)
    #[error("Request was cancelled")]
    Cancelled,

    /// 분류되지 않은 오류 (코드 5000, 500)
    #[error("An unexpected error occurred")]
    Unexpected,

    /// 헬스체크 응답 생성 실패 (코드 6001, 500)
    #[error("Health check failed")]
    HealthCheck,

    /// 에코 응답 생성 실패 (코드 9999, 500)
    #[error("Echo test failed")]
    Echo,
}

impl ApiError {
    /// 클라이언트 계약에 포함되는 수치형 에러 코드를 반환합니다.
    pub fn error_code(&self) -> i32 {
        match self {
            ApiError::Configuration => 1001,
            ApiError::Validation(_) => 2001,
            ApiError::Database { code, .. } => *code,
            ApiError::Cancelled => 4001,
            ApiError::Unexpected => 5000,
            ApiError::HealthCheck => 6001,
            ApiError::Echo => 9999,
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Cancelled => StatusCode::REQUEST_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error_message: self.to_string(),
            error_code: self.error_code(),
        };

        // ErrorResponse 직렬화는 실패하지 않음
        json_response(self.status_code(), &body)
            .unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}
