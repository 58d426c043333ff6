//! 직원 프로필 요청 DTO
//!
//! 프로필 검증/갱신을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! JSON 키는 snake_case이며 저장 프로시저 파라미터 이름과 일치합니다.
//!
//! 필수 문자열 필드는 `#[serde(default)]`로 선언하여 키가 누락되어도
//! 역직렬화가 실패하지 않게 합니다. 누락된 필드는 빈 문자열이 되어
//! `length(min = 1)` 제약에 걸리므로, 파싱 에러 대신 해당 필드를
//! 지목하는 위반 메시지가 수집됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 직원 프로필 검증 요청
///
/// 세 필드 모두 필수이며, 데이터베이스 호출 전에 길이 제약을
/// 만족해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateEmployeeProfileRequest {
    /// 직원 ID (필수, 1-64자)
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 64,
        message = "is required and must be between 1 and 64 characters"
    ))]
    pub employee_id: String,

    /// 이름 (필수, 1-100자)
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "is required and must be between 1 and 100 characters"
    ))]
    pub first_name: String,

    /// 성 (필수, 1-100자)
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "is required and must be between 1 and 100 characters"
    ))]
    pub last_name: String,
}

/// 직원 프로필 갱신 요청
///
/// 선택 필드는 생략 시 저장 프로시저에 SQL NULL로 전달됩니다
/// ("변경하지 않음" 의미). 빈 문자열로 대체하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeProfileRequest {
    /// 직원 ID (필수, 1-64자)
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 64,
        message = "is required and must be between 1 and 64 characters"
    ))]
    pub employee_id: String,

    /// 새 부서명 (선택, 최대 100자)
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub department: Option<String>,

    /// 새 직함 (선택, 최대 100자)
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub job_title: Option<String>,

    /// 새 주소 (선택, 최대 250자)
    #[validate(length(max = 250, message = "must be at most 250 characters"))]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_validate_request_within_bounds() {
        let request = ValidateEmployeeProfileRequest {
            employee_id: "E123".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_request_boundary_lengths() {
        let request = ValidateEmployeeProfileRequest {
            employee_id: "e".repeat(64),
            first_name: "f".repeat(100),
            last_name: "l".repeat(100),
        };
        assert!(request.validate().is_ok());

        let request = ValidateEmployeeProfileRequest {
            employee_id: "e".repeat(65),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_employee_id_is_violation() {
        let request = ValidateEmployeeProfileRequest {
            employee_id: String::new(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        };

        let errors = request.validate().expect_err("must fail");
        assert!(errors.field_errors().contains_key("employee_id"));
    }

    #[test]
    fn test_update_request_none_fields_pass() {
        let request = UpdateEmployeeProfileRequest {
            employee_id: "E123".to_string(),
            department: None,
            job_title: None,
            address: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_field_limits() {
        let request = UpdateEmployeeProfileRequest {
            employee_id: "E123".to_string(),
            department: Some("d".repeat(100)),
            job_title: Some("j".repeat(100)),
            address: Some("a".repeat(250)),
        };
        assert!(request.validate().is_ok());

        let request = UpdateEmployeeProfileRequest {
            employee_id: "E123".to_string(),
            department: Some("d".repeat(101)),
            job_title: None,
            address: None,
        };
        let errors = request.validate().expect_err("must fail");
        assert!(errors.field_errors().contains_key("department"));
    }

    #[test]
    fn test_wire_keys_are_snake_case() {
        let body = r#"{"employee_id":"E123","department":"Finance"}"#;
        let request: UpdateEmployeeProfileRequest =
            serde_json::from_str(body).expect("deserializes");

        assert_eq!(request.employee_id, "E123");
        assert_eq!(request.department.as_deref(), Some("Finance"));

        let serialized = serde_json::to_value(&request).expect("serializes");
        assert!(serialized.get("employee_id").is_some());
        assert!(serialized.get("job_title").is_some());
    }
}
