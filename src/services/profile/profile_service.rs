//! 직원 프로필 비즈니스 로직 서비스
//!
//! 두 비즈니스 엔드포인트가 공유하는 요청당 상태 기계를 구현합니다.
//!
//! 1. **설정 확인** — 연결 문자열이 없으면 코드 1001로 즉시 종료.
//!    데이터베이스 호출은 시도하지 않습니다.
//! 2. **본문 검증** — 위반 사항 전체를 `" | "`로 합쳐 코드 2001로 종료.
//! 3. **프로시저 호출** — 데이터베이스 에러는 번역 테이블로, 성공은
//!    타입이 있는 응답으로 변환.
//!
//! 검증 엔드포인트는 `isValid`가 거짓이어도 HTTP 200을 반환합니다
//! (유효성은 본문으로만 전달). 갱신 엔드포인트는 0행 갱신도 정상
//! no-op 성공으로 취급합니다.

use std::sync::Arc;

use log::{error, info, warn};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::config::SqlConfig;
use crate::core::errors::ApiError;
use crate::core::validation::read_and_validate;
use crate::db::{self, ProfileOperation};
use crate::domain::dto::profile::request::{
    UpdateEmployeeProfileRequest, ValidateEmployeeProfileRequest,
};
use crate::domain::dto::profile::response::{UpdateEmployeeResponse, ValidateEmployeeResponse};
use crate::repositories::profile::ProfileStore;

/// 직원 프로필 검증/갱신 오케스트레이션 서비스
///
/// 요청 간 상태를 갖지 않습니다. 연결 문자열은 호출마다 환경에서
/// 다시 읽고, 스토어 구현이 요청당 연결 하나를 열고 닫습니다.
pub struct EmployeeProfileService {
    store: Arc<dyn ProfileStore>,
}

impl EmployeeProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// 프로필 검증 요청을 처리합니다.
    pub async fn validate_profile(
        &self,
        body: &[u8],
    ) -> Result<ValidateEmployeeResponse, ApiError> {
        let connection_string = self.connection_string()?;
        let request = self
            .read_request::<ValidateEmployeeProfileRequest>(body, ProfileOperation::Validate)?;

        match self
            .store
            .validate_profile(&connection_string, &request)
            .await
        {
            Ok(outcome) => {
                if outcome.is_valid {
                    info!(
                        "Employee profile validation successful. Employee ID: {}, Message: {}",
                        request.employee_id, outcome.message
                    );
                } else {
                    warn!(
                        "Employee profile validation failed. Employee ID: {}, Message: {}",
                        request.employee_id, outcome.message
                    );
                }

                Ok(ValidateEmployeeResponse {
                    is_valid: outcome.is_valid,
                    validation_message: outcome.message,
                })
            }
            Err(db_error) => {
                error!(
                    "Database error occurred while validating employee profile. Employee ID: {}, Error: {}",
                    request.employee_id, db_error
                );
                Err(db::translate(ProfileOperation::Validate, &db_error))
            }
        }
    }

    /// 프로필 갱신 요청을 처리합니다.
    pub async fn update_profile(&self, body: &[u8]) -> Result<UpdateEmployeeResponse, ApiError> {
        let connection_string = self.connection_string()?;
        let request =
            self.read_request::<UpdateEmployeeProfileRequest>(body, ProfileOperation::Update)?;

        match self.store.update_profile(&connection_string, &request).await {
            Ok(outcome) => {
                if outcome.rows_updated > 0 {
                    info!(
                        "Successfully updated employee profile. Employee ID: {}, Rows Updated: {}, Message: {}",
                        request.employee_id, outcome.rows_updated, outcome.message
                    );
                } else {
                    info!(
                        "Employee profile update completed - no changes required. Employee ID: {}, Message: {}",
                        request.employee_id, outcome.message
                    );
                }

                Ok(UpdateEmployeeResponse {
                    message: outcome.message,
                    rows_updated: outcome.rows_updated,
                })
            }
            Err(db_error) => {
                error!(
                    "Database error occurred during employee update. Employee ID: {}, Error: {}",
                    request.employee_id, db_error
                );
                Err(db::translate(ProfileOperation::Update, &db_error))
            }
        }
    }

    /// 요청마다 연결 문자열을 환경에서 읽습니다. 없으면 설정 에러.
    fn connection_string(&self) -> Result<String, ApiError> {
        SqlConfig::connection_string().ok_or_else(|| {
            error!("SqlConnectionString not configured in application settings");
            ApiError::Configuration
        })
    }

    /// 본문을 읽고 검증합니다. 위반 사항은 전부 합쳐 하나의 검증
    /// 에러로 반환합니다.
    fn read_request<T>(&self, body: &[u8], operation: ProfileOperation) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let (request, violations) = read_and_validate::<T>(body, true);

        match request {
            Some(request) if violations.is_empty() => Ok(request),
            _ => {
                let combined = violations.join(" | ");
                warn!(
                    "Validation failed for {}: {}",
                    operation.name(),
                    combined
                );
                Err(ApiError::Validation(combined))
            }
        }
    }
}
