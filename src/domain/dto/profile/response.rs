//! 직원 프로필 응답 DTO
//!
//! 성공/실패 응답의 와이어 형태를 정의합니다. JSON 키는 lower
//! camelCase이며 기존 클라이언트와의 계약이므로 바꾸면 안 됩니다.

use serde::{Deserialize, Serialize};

/// 프로필 검증 성공 응답
///
/// 검증 결과가 부정적이어도 HTTP 200으로 전달되며, 유효성은 본문의
/// `isValid` 필드로만 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmployeeResponse {
    /// 데이터베이스가 보고한 유효성 플래그
    pub is_valid: bool,
    /// 검증 결과 메시지
    pub validation_message: String,
}

/// 프로필 갱신 성공 응답
///
/// 0행 갱신도 정상적인 no-op 성공입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeResponse {
    /// 갱신 결과 메시지
    pub message: String,
    /// 갱신된 행 수
    pub rows_updated: i32,
}

/// 표준 에러 응답
///
/// 요청 하나가 실패할 때마다 한 번 생성되어 직렬화된 뒤 폐기됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error_message: String,
    /// 프로그램적 처리를 위한 에러 코드
    pub error_code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_response_wire_keys() {
        let response = ValidateEmployeeResponse {
            is_valid: true,
            validation_message: "Profile matched".to_string(),
        };

        let value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(value["isValid"], true);
        assert_eq!(value["validationMessage"], "Profile matched");
    }

    #[test]
    fn test_update_response_wire_keys() {
        let response = UpdateEmployeeResponse {
            message: "1 row updated".to_string(),
            rows_updated: 1,
        };

        let value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(value["message"], "1 row updated");
        assert_eq!(value["rowsUpdated"], 1);
    }

    #[test]
    fn test_error_response_wire_keys() {
        let response = ErrorResponse {
            error_message: "Database configuration error".to_string(),
            error_code: 1001,
        };

        let value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(value["errorMessage"], "Database configuration error");
        assert_eq!(value["errorCode"], 1001);
    }
}
