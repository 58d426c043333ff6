//! 애플리케이션 설정 관리 모듈
//!
//! 데이터베이스 연결 문자열, 서버 바인딩, 실행 환경 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `SERVICE_ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| {
                env::var("SERVICE_ENVIRONMENT").unwrap_or_else(|_| "production".to_string())
            })
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 헬스체크 응답 등에 노출되는 환경 이름을 반환합니다.
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Test => "Test",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }
}

/// SQL Server 연결 설정
pub struct SqlConfig;

impl SqlConfig {
    /// 저장 프로시저 호출에 사용할 ADO 연결 문자열을 반환합니다.
    ///
    /// 요청마다 `SqlConnectionString` 환경 변수를 다시 읽습니다.
    /// 값이 없거나 공백뿐이면 `None`을 반환하며, 호출 측에서
    /// 설정 에러(코드 1001)로 처리해야 합니다.
    pub fn connection_string() -> Option<String> {
        env::var("SqlConnectionString")
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{env_lock, remove_env, set_env};

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::Development.name(), "Development");
        assert_eq!(Environment::Production.name(), "Production");
    }

    #[test]
    fn test_connection_string_missing_or_blank() {
        let _guard = env_lock();

        remove_env("SqlConnectionString");
        assert_eq!(SqlConfig::connection_string(), None);

        set_env("SqlConnectionString", "   ");
        assert_eq!(SqlConfig::connection_string(), None);

        set_env(
            "SqlConnectionString",
            "Server=tcp:localhost,1433;Database=hr;User Id=svc;Password=pw",
        );
        assert!(SqlConfig::connection_string().is_some());

        remove_env("SqlConnectionString");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
