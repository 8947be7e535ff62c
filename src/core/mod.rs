//! 핵심 인프라 모듈
//!
//! 애플리케이션 구성 요소를 생성하고 연결하는 컴포지션 루트를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use linguarium_client::core::AppContext;
//! use linguarium_client::transport::SessionStore;
//!
//! let context = AppContext::from_env(SessionStore::new())?;
//! let me = context.user_service().get_current_user().await?;
//! ```

pub mod app_context;

pub use app_context::*;
