//! # Configuration Module
//!
//! 클라이언트가 호출하는 백엔드 엔드포인트와 인증 프로바이더 설정을 관리합니다.
//! 전역 정적 상수 대신 생성 후 변경되지 않는 설정 객체를 만들어
//! 필요한 컴포넌트에 생성자로 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`endpoint_config`] - 베이스 URL에서 파생되는 API/OAuth URL 레지스트리
//! - [`auth_config`] - 인증 프로바이더 태그와 OAuth 프로바이더
//!
//! ## 환경 분리
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev` 또는 `.env.prod` 파일을 읽고,
//! [`EndpointConfig::from_env`]가 `API_BASE_URL`, `OAUTH_REDIRECT_URI` 값을 사용합니다.
//! 값이 없으면 로컬 개발용 기본값으로 동작합니다.

pub mod endpoint_config;
pub mod auth_config;

pub use endpoint_config::*;
pub use auth_config::*;
