//! Linguarium 클라이언트
//!
//! Linguarium 백엔드 REST API를 호출하는 타입 안전한 클라이언트입니다.
//! 로그인/회원가입, 사용자 프로필 조회와 삭제, 엔드포인트 및 소셜 로그인 URL 레지스트리를 제공합니다.
//!
//! # Features
//!
//! - **엔드포인트 레지스트리**: 하나의 베이스 URL로부터 모든 URL을 파생
//! - **로컬 인증**: 이메일/패스워드 로그인, `LOCAL` 프로바이더 회원가입
//! - **사용자 리소스**: 현재 사용자, ID 조회, 계정 삭제
//! - **명시적 DI**: 전송 계층과 설정을 생성자로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   AppContext    │ ← 컴포지션 루트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HttpTransport   │ ← reqwest + Bearer 세션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use linguarium_client::core::AppContext;
//! use linguarium_client::domain::dto::users::LoginRequest;
//! use linguarium_client::transport::SessionStore;
//!
//! let context = AppContext::from_env(SessionStore::new())?;
//! context.auth_service().login(&LoginRequest::new("user@example.com", "password")).await?;
//! let me = context.user_service().get_current_user().await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod transport;
pub mod utils;
pub mod errors;
