//! 직원 프로필 백엔드 서비스
//!
//! SQL Server 저장 프로시저에 위임하여 직원 프로필을 검증/갱신하는
//! HTTP 서비스입니다. 요청 본문 검증, 데이터베이스 에러 코드 번역,
//! 진단용 헬스체크/에코 엔드포인트를 제공합니다.
//!
//! # Features
//!
//! - **프로필 검증**: `dbo.ValidateEmployeeProfile` 저장 프로시저 호출
//! - **프로필 갱신**: `dbo.UpdateEmployeeProfile` 저장 프로시저 호출
//! - **선언적 검증**: `validator` 기반 필드 제약 조건, 위반 사항 전체 수집
//! - **에러 번역**: SQL 에러 번호 → 고정 (메시지, 에러 코드, HTTP 상태) 테이블
//! - **진단**: 헬스체크 및 에코 엔드포인트 (본문 오류에 관대)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST 엔드포인트 4개
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 설정 확인 → 본문 검증 → 저장 프로시저 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ProfileStore   │ ← 데이터 액세스 (tiberius, 요청당 연결 1개)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SQL Server    │ ← 저장 프로시저
//! └─────────────────┘
//! ```
//!
//! 모든 상태는 요청 범위입니다. 연결 문자열은 호출마다 환경 변수에서
//! 읽고, 데이터베이스 연결은 호출 하나에만 사용된 뒤 닫힙니다.

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
