//! 직원 프로필 스토어 모듈

pub mod mssql_store;
pub mod profile_store;

pub use mssql_store::MssqlProfileStore;
pub use profile_store::{ProfileStore, ProfileUpdate, ProfileValidation};
