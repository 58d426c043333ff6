//! 테스트 공용 헬퍼
//!
//! 환경 변수를 건드리는 테스트들이 서로 간섭하지 않도록
//! 프로세스 전역 락과 set/remove 래퍼를 제공합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use async_trait::async_trait;

use crate::db::DbError;
use crate::domain::dto::profile::request::{
    UpdateEmployeeProfileRequest, ValidateEmployeeProfileRequest,
};
use crate::repositories::profile::{ProfileStore, ProfileUpdate, ProfileValidation};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// 환경 변수를 읽고 쓰는 테스트 구간을 직렬화하는 락을 획득합니다.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn set_env(key: &str, value: &str) {
    // edition 2024에서 set_var는 unsafe. env_lock으로 직렬화된 구간에서만 호출.
    unsafe { std::env::set_var(key, value) }
}

pub(crate) fn remove_env(key: &str) {
    unsafe { std::env::remove_var(key) }
}

/// 서비스/핸들러 테스트용 인메모리 프로필 스토어
///
/// 미리 정해둔 결과를 돌려주고 호출 횟수를 기록합니다.
pub(crate) struct StubProfileStore {
    pub validate_result: Result<ProfileValidation, DbError>,
    pub update_result: Result<ProfileUpdate, DbError>,
    pub calls: AtomicUsize,
}

impl Default for StubProfileStore {
    fn default() -> Self {
        Self {
            validate_result: Ok(ProfileValidation {
                is_valid: true,
                message: "Employee profile is valid".to_string(),
            }),
            update_result: Ok(ProfileUpdate {
                message: "Profile updated".to_string(),
                rows_updated: 1,
            }),
            calls: AtomicUsize::new(0),
        }
    }
}

impl StubProfileStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for StubProfileStore {
    async fn validate_profile(
        &self,
        _connection_string: &str,
        _request: &ValidateEmployeeProfileRequest,
    ) -> Result<ProfileValidation, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.validate_result.clone()
    }

    async fn update_profile(
        &self,
        _connection_string: &str,
        _request: &UpdateEmployeeProfileRequest,
    ) -> Result<ProfileUpdate, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.update_result.clone()
    }
}
