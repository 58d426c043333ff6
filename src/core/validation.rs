//! 요청 본문 검증 파이프라인
//!
//! 원시 요청 본문을 타입이 있는 DTO로 역직렬화하고 선언적 필드 제약
//! 조건을 평가합니다. 위반 사항은 첫 번째에서 멈추지 않고 전부
//! 수집하여, 클라이언트가 한 번의 왕복으로 모든 문제를 볼 수 있게
//! 합니다.
//!
//! 반환 규약:
//!
//! - 본문이 비었고 필수이면 → `(None, ["Request body is required."])`
//! - 본문이 비었고 필수가 아니면 → `(None, [])`
//! - JSON 파싱 실패 → `(None, ["Invalid JSON payload."])`
//! - 제약 조건 위반 → `(None, 위반 목록)` — 필드명 기준 정렬
//! - 성공 → `(Some(value), [])`

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// 빈 필수 본문에 대한 위반 메시지 (와이어 계약)
pub const BODY_REQUIRED: &str = "Request body is required.";

/// 파싱 불가능한 본문에 대한 위반 메시지 (와이어 계약)
pub const INVALID_JSON: &str = "Invalid JSON payload.";

/// 원시 본문을 읽어 역직렬화와 제약 조건 검증을 수행합니다.
///
/// actix는 본문을 버퍼에 담아 전달하므로 스트림 위치 복원 문제가
/// 없습니다. 값과 위반 목록은 동시에 채워지지 않습니다.
pub fn read_and_validate<T>(body: &[u8], required: bool) -> (Option<T>, Vec<String>)
where
    T: DeserializeOwned + Validate,
{
    let Ok(text) = std::str::from_utf8(body) else {
        return (None, vec![INVALID_JSON.to_string()]);
    };

    if text.trim().is_empty() {
        if required {
            return (None, vec![BODY_REQUIRED.to_string()]);
        }
        return (None, Vec::new());
    }

    let value: T = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return (None, vec![INVALID_JSON.to_string()]),
    };

    match value.validate() {
        Ok(()) => (Some(value), Vec::new()),
        Err(errors) => (None, collect_violations(&errors)),
    }
}

/// `ValidationErrors`를 사람이 읽을 수 있는 위반 목록으로 평탄화합니다.
///
/// `field_errors()`는 해시맵이라 순서가 불안정하므로 필드명 기준으로
/// 정렬하여 응답을 결정적으로 만듭니다.
fn collect_violations(errors: &ValidationErrors) -> Vec<String> {
    let mut violations: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_deref()
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("failed validation: {}", error.code));
                format!("{field}: {reason}")
            })
        })
        .collect();

    violations.sort();
    violations
}
