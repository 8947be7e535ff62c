//! 클라이언트 전역에서 사용하는 에러 시스템
//!
//! 백엔드 호출 과정에서 발생하는 실패를 해석하지 않고 그대로 호출자에게 전달합니다.
//! 재시도, 백오프, 대체 응답 같은 정책은 이 계층에 존재하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use linguarium_client::errors::ClientError;
//!
//! match user_service.get_account_by_id(42).await {
//!     Ok(profile) => println!("{}", profile.username),
//!     Err(ClientError::Status { status: 404, .. }) => println!("사용자 없음"),
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// 클라이언트 전역 에러 타입
///
/// 네트워크 실패, 2xx 이외의 응답, 응답 파싱 실패를 구분만 할 뿐
/// 서버 응답 본문은 가공하지 않고 보존합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// 연결 실패, DNS 실패 등 전송 계층 에러
    #[error("Transport error: {0}")]
    Transport(String),

    /// 서버가 2xx 이외의 상태 코드로 응답한 경우
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// 응답 본문이 기대한 레코드 형태와 다른 경우
    #[error("Decode error: {0}")]
    Decode(String),

    /// 잘못된 설정값
    #[error("Configuration error: {0}")]
    Config(String),

    /// 입력값 검증 에러 (폼 계층에서만 사용)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClientError {
    /// 서버 응답 상태 코드 (상태 에러인 경우에만)
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        ClientError::Validation(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ClientResult<T> = Result<T, ClientError>;
