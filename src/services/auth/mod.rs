//! 인증 서비스 모듈
//!
//! 로컬 로그인과 회원가입 요청을 담당합니다.
//! 소셜 로그인은 [`EndpointConfig`](crate::config::EndpointConfig)가 제공하는
//! 리디렉션 URL로 브라우저를 이동시키는 방식이며 이 모듈은 관여하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use linguarium_client::services::auth::AuthService;
//! use linguarium_client::domain::dto::users::LoginRequest;
//!
//! let auth = AuthService::new(transport, config, session);
//! let tokens = auth.login(&LoginRequest::new("user@example.com", "password")).await?;
//! ```

pub mod auth_service;

pub use auth_service::*;
