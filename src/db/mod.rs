//! 데이터베이스 에러 번역 모듈
//!
//! 데이터베이스 계층이 보고한 에러를 고정된 클라이언트 대면
//! (메시지, 에러 코드, HTTP 상태) 삼중항으로 번역합니다.
//!
//! SQL 에러 번호 매핑은 분기문이 아니라 (작업, 에러 번호)를 키로 하는
//! 정적 조회 테이블입니다. 이 테이블은 와이어 호환성 계약이므로
//! 행을 바꾸면 클라이언트가 보는 동작이 조용히 달라집니다 —
//! 반드시 테스트와 함께 변경해야 합니다.

use thiserror::Error;

use crate::core::errors::ApiError;

/// 저장 프로시저 작업 종류
///
/// 번역 테이블의 스코프 판정과 일반 실패 메시지 선택에 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOperation {
    /// `dbo.ValidateEmployeeProfile`
    Validate,
    /// `dbo.UpdateEmployeeProfile`
    Update,
}

impl ProfileOperation {
    /// 로그에 쓰이는 작업 이름을 반환합니다.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileOperation::Validate => "ValidateEmployeeProfile",
            ProfileOperation::Update => "UpdateEmployeeProfile",
        }
    }

    /// 테이블에 없는 SQL 에러 번호에 대한 일반 실패 메시지를 만듭니다.
    fn generic_failure_message(&self, number: i32) -> String {
        match self {
            ProfileOperation::Validate => format!("Database operation failed (Error {number})"),
            ProfileOperation::Update => format!("Database update failed (Error {number})"),
        }
    }
}

/// 데이터베이스 계층 에러
///
/// 드라이버 독립적인 분류입니다. SQL Server가 번호를 보고한 경우와
/// 그 이전 단계(연결, 프로토콜, 클라이언트 측 타임아웃)에서 실패한
/// 경우를 구분합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DbError {
    /// SQL Server가 보고한 에러 번호
    #[error("sql server error {0}")]
    Sql(i32),

    /// 연결 단계 실패 (TCP, TLS, 리다이렉션)
    #[error("database connection failed: {0}")]
    Connection(String),

    /// 잘못된 드라이버/프로토콜 상태 (연결 문자열 파싱 실패 포함)
    #[error("invalid database operation: {0}")]
    InvalidOperation(String),

    /// 60초 명령 타임아웃 초과
    #[error("database command timed out")]
    CommandTimeout,
}

/// 매핑 행의 적용 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// 두 작업 모두에 적용
    Any,
    /// 갱신 작업에만 적용 — 검증 작업에서는 일반 폴백(3000)으로 처리
    UpdateOnly,
}

/// SQL 에러 번호 → 클라이언트 응답 매핑 행
struct SqlErrorMapping {
    scope: Scope,
    number: i32,
    message: &'static str,
    error_code: i32,
    status: u16,
}

/// 고정 번역 테이블. 행 순서는 의미가 없으며 (scope, number)가 키입니다.
const SQL_ERROR_TABLE: &[SqlErrorMapping] = &[
    SqlErrorMapping {
        scope: Scope::Any,
        number: 2,
        message: "Database connection timeout",
        error_code: 3001,
        status: 500,
    },
    SqlErrorMapping {
        scope: Scope::Any,
        number: 18456,
        message: "Database authentication failed",
        error_code: 3002,
        status: 500,
    },
    SqlErrorMapping {
        scope: Scope::Any,
        number: 208,
        message: "Database schema error: required table or stored procedure not found",
        error_code: 3006,
        status: 500,
    },
    SqlErrorMapping {
        scope: Scope::Any,
        number: 2812,
        message: "Database schema error: stored procedure not found",
        error_code: 3007,
        status: 500,
    },
    SqlErrorMapping {
        scope: Scope::Any,
        number: -2,
        message: "Database command timeout",
        error_code: 3005,
        status: 408,
    },
    SqlErrorMapping {
        scope: Scope::UpdateOnly,
        number: 547,
        message: "Data constraint violation",
        error_code: 3003,
        status: 400,
    },
    SqlErrorMapping {
        scope: Scope::UpdateOnly,
        number: 515,
        message: "Required field cannot be null",
        error_code: 3008,
        status: 400,
    },
    SqlErrorMapping {
        scope: Scope::UpdateOnly,
        number: 8152,
        message: "Data too long for database field",
        error_code: 3009,
        status: 400,
    },
];

/// 데이터베이스 에러를 클라이언트 대면 `ApiError::Database`로 번역합니다.
///
/// SQL 에러 번호는 테이블에서 조회하며, 테이블에 없는 번호는 작업별
/// 일반 메시지와 코드 3000으로 폴백합니다. SQL 이전 단계의 실패는
/// 작업과 무관하게 고정 코드로 매핑됩니다.
pub fn translate(operation: ProfileOperation, error: &DbError) -> ApiError {
    match error {
        DbError::Sql(number) => {
            let row = SQL_ERROR_TABLE.iter().find(|row| {
                row.number == *number
                    && (row.scope == Scope::Any || operation == ProfileOperation::Update)
            });

            match row {
                Some(row) => ApiError::Database {
                    message: row.message.to_string(),
                    code: row.error_code,
                    status: row.status,
                },
                None => ApiError::Database {
                    message: operation.generic_failure_message(*number),
                    code: 3000,
                    status: 500,
                },
            }
        }
        DbError::Connection(_) => ApiError::Database {
            message: "Database connection timeout".to_string(),
            code: 3001,
            status: 500,
        },
        DbError::InvalidOperation(_) => ApiError::Database {
            message: "Invalid database operation".to_string(),
            code: 3004,
            status: 500,
        },
        DbError::CommandTimeout => ApiError::Database {
            message: "Database command timeout".to_string(),
            code: 3005,
            status: 408,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_translation(
        operation: ProfileOperation,
        number: i32,
        message: &str,
        code: i32,
        status: u16,
    ) {
        let translated = translate(operation, &DbError::Sql(number));
        assert_eq!(
            translated,
            ApiError::Database {
                message: message.to_string(),
                code,
                status,
            },
            "sql error {number} for {}",
            operation.name()
        );
    }

    #[test]
    fn test_shared_rows_apply_to_both_operations() {
        for operation in [ProfileOperation::Validate, ProfileOperation::Update] {
            assert_translation(operation, 2, "Database connection timeout", 3001, 500);
            assert_translation(operation, 18456, "Database authentication failed", 3002, 500);
            assert_translation(
                operation,
                208,
                "Database schema error: required table or stored procedure not found",
                3006,
                500,
            );
            assert_translation(
                operation,
                2812,
                "Database schema error: stored procedure not found",
                3007,
                500,
            );
            assert_translation(operation, -2, "Database command timeout", 3005, 408);
        }
    }

    #[test]
    fn test_update_only_rows() {
        assert_translation(
            ProfileOperation::Update,
            547,
            "Data constraint violation",
            3003,
            400,
        );
        assert_translation(
            ProfileOperation::Update,
            515,
            "Required field cannot be null",
            3008,
            400,
        );
        assert_translation(
            ProfileOperation::Update,
            8152,
            "Data too long for database field",
            3009,
            400,
        );
    }

    #[test]
    fn test_update_only_rows_fall_back_for_validate() {
        // 갱신 전용 행은 검증 작업에서 일반 폴백으로 처리되어야 함
        for number in [547, 515, 8152] {
            assert_translation(
                ProfileOperation::Validate,
                number,
                &format!("Database operation failed (Error {number})"),
                3000,
                500,
            );
        }
    }

    #[test]
    fn test_unknown_numbers_use_generic_fallback() {
        assert_translation(
            ProfileOperation::Validate,
            50000,
            "Database operation failed (Error 50000)",
            3000,
            500,
        );
        assert_translation(
            ProfileOperation::Update,
            50000,
            "Database update failed (Error 50000)",
            3000,
            500,
        );
    }

    #[test]
    fn test_connection_failure_translation() {
        let translated = translate(
            ProfileOperation::Validate,
            &DbError::Connection("connection refused".to_string()),
        );

        assert_eq!(
            translated,
            ApiError::Database {
                message: "Database connection timeout".to_string(),
                code: 3001,
                status: 500,
            }
        );
    }

    #[test]
    fn test_invalid_operation_translation() {
        let translated = translate(
            ProfileOperation::Update,
            &DbError::InvalidOperation("bad connection string".to_string()),
        );

        assert_eq!(
            translated,
            ApiError::Database {
                message: "Invalid database operation".to_string(),
                code: 3004,
                status: 500,
            }
        );
    }

    #[test]
    fn test_command_timeout_translation() {
        for operation in [ProfileOperation::Validate, ProfileOperation::Update] {
            let translated = translate(operation, &DbError::CommandTimeout);

            assert_eq!(
                translated,
                ApiError::Database {
                    message: "Database command timeout".to_string(),
                    code: 3005,
                    status: 408,
                }
            );
        }
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ProfileOperation::Validate.name(), "ValidateEmployeeProfile");
        assert_eq!(ProfileOperation::Update.name(), "UpdateEmployeeProfile");
    }
}
