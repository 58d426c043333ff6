//! 데이터 액세스 계층
//!
//! 저장 프로시저 호출을 trait 뒤로 추상화합니다. 서비스 계층은
//! `ProfileStore`에만 의존하며, 프로덕션 구현은 tiberius 기반의
//! `MssqlProfileStore`입니다.

pub mod profile;
