//! 사용자/인증 응답 DTO 모듈
//!
//! 백엔드 응답을 명시적인 레코드 타입으로 매핑하여
//! 클라이언트와 서버 사이의 필드 형태 불일치를 경계에서 드러냅니다.

pub mod user_response;
pub mod auth_response;

pub use user_response::UserProfile;
pub use auth_response::{ApiMessage, JwtAuthResponse};
