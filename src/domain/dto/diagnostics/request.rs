//! 진단 요청 DTO
//!
//! 헬스체크/에코 엔드포인트의 선택적 요청 본문입니다. 두 엔드포인트
//! 모두 본문이 없거나 잘못되어도 요청을 거부하지 않으며, 위반 사항은
//! 로그로만 남깁니다. JSON 키는 lower camelCase입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 헬스체크 요청 (선택적 확장 진단 설정)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckRequest {
    /// 데이터베이스 연결 확인 포함 여부
    #[serde(default)]
    pub check_database: bool,

    /// 성능 메트릭 포함 여부
    #[serde(default)]
    pub include_metrics: bool,

    /// 추적용 클라이언트 식별자 (선택, 최대 100자)
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub client_identifier: Option<String>,
}

/// 에코 테스트 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    /// 테스트 이름 필드 (선택, 최대 50자)
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub name: Option<String>,

    /// 테스트 정수 필드 (선택, ±1,000,000 범위)
    #[validate(range(
        min = -1_000_000,
        max = 1_000_000,
        message = "must be between -1000000 and 1000000"
    ))]
    pub value: Option<i32>,

    /// 테스트 설명 필드 (선택, 최대 250자)
    #[validate(length(max = 250, message = "must be at most 250 characters"))]
    pub description: Option<String>,
}
