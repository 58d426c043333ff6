//! SQL Server 프로필 스토어 구현
//!
//! tiberius로 저장 프로시저를 호출하는 `ProfileStore` 구현입니다.
//! 연결은 호출마다 새로 열고 함수 반환 시 모든 종료 경로(성공,
//! 데이터베이스 예외, 타임아웃)에서 drop으로 닫힙니다.
//!
//! 출력 파라미터는 T-SQL 배치로 선언/전달한 뒤 마지막 SELECT로
//! 읽어옵니다. 명령 타임아웃은 60초입니다.

use std::time::Duration;

use async_trait::async_trait;
use tiberius::{Client, Config, Row, ToSql};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::db::DbError;
use crate::domain::dto::profile::request::{
    UpdateEmployeeProfileRequest, ValidateEmployeeProfileRequest,
};
use crate::repositories::profile::profile_store::{
    ProfileStore, ProfileUpdate, ProfileValidation,
};

type SqlClient = Client<Compat<TcpStream>>;

/// 저장 프로시저 명령 타임아웃
const COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// 검증 프로시저 호출 배치. 출력 파라미터를 마지막 SELECT로 투영.
const VALIDATE_PROFILE_SQL: &str = "\
DECLARE @IsValid BIT, @ValidationMessage NVARCHAR(4000);
EXEC dbo.ValidateEmployeeProfile
    @employee_id = @P1,
    @first_name = @P2,
    @last_name = @P3,
    @IsValid = @IsValid OUTPUT,
    @ValidationMessage = @ValidationMessage OUTPUT;
SELECT @IsValid AS is_valid, @ValidationMessage AS validation_message;";

/// 갱신 프로시저 호출 배치. 생략된 선택 필드는 NULL로 바인딩됨.
const UPDATE_PROFILE_SQL: &str = "\
DECLARE @UpdateMessage NVARCHAR(4000), @RowsUpdated INT;
EXEC dbo.UpdateEmployeeProfile
    @employee_id = @P1,
    @new_department = @P2,
    @new_job_title = @P3,
    @new_address = @P4,
    @UpdateMessage = @UpdateMessage OUTPUT,
    @RowsUpdated = @RowsUpdated OUTPUT;
SELECT @UpdateMessage AS update_message, @RowsUpdated AS rows_updated;";

/// tiberius 기반 프로덕션 프로필 스토어
///
/// 상태를 갖지 않습니다. 연결 문자열은 매 호출 인자로 받습니다.
pub struct MssqlProfileStore;

impl MssqlProfileStore {
    async fn connect(&self, connection_string: &str) -> Result<SqlClient, DbError> {
        let config = Config::from_ado_string(connection_string)
            .map_err(|error| DbError::InvalidOperation(error.to_string()))?;

        let tcp = TcpStream::connect(config.get_addr())
            .await
            .map_err(|error| DbError::Connection(error.to_string()))?;
        tcp.set_nodelay(true)
            .map_err(|error| DbError::Connection(error.to_string()))?;

        Client::connect(config, tcp.compat_write())
            .await
            .map_err(DbError::from)
    }
}

#[async_trait]
impl ProfileStore for MssqlProfileStore {
    async fn validate_profile(
        &self,
        connection_string: &str,
        request: &ValidateEmployeeProfileRequest,
    ) -> Result<ProfileValidation, DbError> {
        let mut client = self.connect(connection_string).await?;

        let row = run_output_query(
            &mut client,
            VALIDATE_PROFILE_SQL,
            &[
                &request.employee_id,
                &request.first_name,
                &request.last_name,
            ],
        )
        .await?;

        let is_valid = row.get::<bool, _>("is_valid").unwrap_or(false);
        let message = row
            .get::<&str, _>("validation_message")
            .unwrap_or_default()
            .to_string();

        Ok(ProfileValidation { is_valid, message })
    }

    async fn update_profile(
        &self,
        connection_string: &str,
        request: &UpdateEmployeeProfileRequest,
    ) -> Result<ProfileUpdate, DbError> {
        let mut client = self.connect(connection_string).await?;

        let row = run_output_query(
            &mut client,
            UPDATE_PROFILE_SQL,
            &[
                &request.employee_id,
                &request.department,
                &request.job_title,
                &request.address,
            ],
        )
        .await?;

        let message = row
            .get::<&str, _>("update_message")
            .unwrap_or_default()
            .to_string();
        let rows_updated = row.get::<i32, _>("rows_updated").unwrap_or(0);

        Ok(ProfileUpdate {
            message,
            rows_updated,
        })
    }
}

/// 배치를 실행하고 출력 파라미터가 담긴 단일 행을 반환합니다.
///
/// 명령 전체(실행 + 행 수신)에 60초 타임아웃을 적용합니다.
async fn run_output_query(
    client: &mut SqlClient,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Row, DbError> {
    let command = async {
        let stream = client.query(sql, params).await?;
        stream.into_row().await
    };

    match tokio::time::timeout(COMMAND_TIMEOUT, command).await {
        Ok(Ok(Some(row))) => Ok(row),
        Ok(Ok(None)) => Err(DbError::InvalidOperation(
            "stored procedure returned no output row".to_string(),
        )),
        Ok(Err(error)) => Err(DbError::from(error)),
        Err(_) => Err(DbError::CommandTimeout),
    }
}

impl From<tiberius::error::Error> for DbError {
    fn from(error: tiberius::error::Error) -> Self {
        use tiberius::error::Error;

        match error {
            Error::Server(token) => DbError::Sql(token.code() as i32),
            Error::Io { message, .. } => DbError::Connection(message),
            Error::Tls(message) => DbError::Connection(message),
            Error::Routing { host, port } => {
                DbError::Connection(format!("server redirected to {host}:{port}"))
            }
            other => DbError::InvalidOperation(other.to_string()),
        }
    }
}
