//! 백엔드 호출을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전송 계층과 엔드포인트 설정을 생성자로 주입받습니다.
//! 각 메서드는 한 번의 HTTP 호출을 수행하고 하나의 결과를 비동기로 돌려줍니다.
//!
//! # Features
//!
//! - 로컬 로그인 / 회원가입
//! - 현재 사용자 조회, 계정 삭제, ID 기반 사용자 조회

pub mod users;
pub mod auth;
