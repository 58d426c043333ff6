//! 응답 직렬화 모듈
//!
//! 성공/에러 페이로드를 JSON으로 직렬화하고 UTF-8 charset이 명시된
//! Content-Type 헤더를 설정합니다. 상태 코드는 항상 핸들러가 결정하며
//! 본문에서 유도하지 않습니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// 직렬화된 JSON 본문과 `application/json; charset=utf-8` 헤더를 가진
/// 응답을 생성합니다.
///
/// `HttpResponseBuilder::json`은 charset 없는 Content-Type을 설정하므로
/// 직접 직렬화합니다. 직렬화 실패는 호출 측에서 해당 작업의 실패
/// 에러 코드로 변환합니다.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<HttpResponse, serde_json::Error> {
    let payload = serde_json::to_string(body)?;

    Ok(HttpResponse::build(status)
        .content_type("application/json; charset=utf-8")
        .body(payload))
}
