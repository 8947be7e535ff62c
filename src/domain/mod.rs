//! 도메인 계층
//!
//! 이 클라이언트는 엔티티를 직접 만들거나 저장하지 않습니다.
//! 요청마다 생성되고 버려지는 값 타입 DTO만 정의합니다.

pub mod dto;

pub use dto::*;
