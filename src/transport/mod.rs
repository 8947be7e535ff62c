//! 전송 계층 모듈
//!
//! 서비스가 생성한 [`ApiRequest`]를 실제 HTTP 호출로 바꾸는 계층입니다.
//! 인증 토큰 부착(인터셉터 역할)도 여기서 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linguarium_client::transport::{ReqwestTransport, SessionStore};
//!
//! let session = Arc::new(SessionStore::new());
//! let transport = Arc::new(ReqwestTransport::new(session.clone()));
//! ```

pub mod http_transport;
pub mod reqwest_transport;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use http_transport::*;
pub use reqwest_transport::*;
pub use session::*;
