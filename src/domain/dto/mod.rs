//! 백엔드와 주고받는 요청/응답 DTO

pub mod users;

pub use users::*;
