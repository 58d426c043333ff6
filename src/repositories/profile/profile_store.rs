//! 프로필 스토어 인터페이스
//!
//! 서비스 계층이 소비하는 데이터 액세스 계약입니다. 연결 문자열은
//! 요청마다 호출 측에서 전달하며, 구현은 호출 하나에 연결 하나를
//! 사용하고 반환 전에 닫아야 합니다. 재시도는 어디에서도 하지
//! 않습니다 — 실패한 호출은 즉시 보고됩니다.

use async_trait::async_trait;

use crate::db::DbError;
use crate::domain::dto::profile::request::{
    UpdateEmployeeProfileRequest, ValidateEmployeeProfileRequest,
};

/// 검증 저장 프로시저의 출력 파라미터 쌍
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileValidation {
    /// `@IsValid` 출력 파라미터
    pub is_valid: bool,
    /// `@ValidationMessage` 출력 파라미터
    pub message: String,
}

/// 갱신 저장 프로시저의 출력 파라미터 쌍
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    /// `@UpdateMessage` 출력 파라미터
    pub message: String,
    /// `@RowsUpdated` 출력 파라미터. 0이어도 정상적인 no-op 성공.
    pub rows_updated: i32,
}

/// 직원 프로필 저장 프로시저 호출 계약
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `dbo.ValidateEmployeeProfile`을 호출합니다.
    async fn validate_profile(
        &self,
        connection_string: &str,
        request: &ValidateEmployeeProfileRequest,
    ) -> Result<ProfileValidation, DbError>;

    /// `dbo.UpdateEmployeeProfile`을 호출합니다.
    ///
    /// 생략된 선택 필드는 SQL NULL로 전달하여 저장 프로시저가
    /// "변경하지 않음"과 "값 비우기"를 구분할 수 있게 합니다.
    async fn update_profile(
        &self,
        connection_string: &str,
        request: &UpdateEmployeeProfileRequest,
    ) -> Result<ProfileUpdate, DbError>;
}
