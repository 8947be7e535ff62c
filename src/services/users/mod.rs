//! 사용자 리소스 서비스 모듈
//!
//! 인증된 사용자의 프로필 리소스를 조회하고 관리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use linguarium_client::services::users::UserService;
//!
//! let user_service = UserService::new(transport, config);
//! let me = user_service.get_current_user().await?;
//! ```

pub mod user_service;

pub use user_service::*;
