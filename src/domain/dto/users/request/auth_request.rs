//! 인증 요청관련 DTO
//!
//! 로그인, 회원가입 시 백엔드로 전송되는 요청 본문을 매핑합니다.
//! 검증 규칙은 폼 계층(CLI)에서만 사용하며 서비스 계층은 값을 그대로 전송합니다.
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::config::AuthProvider;

/// 로컬 로그인 요청 구조체
///
/// 직렬화 결과는 정확히 `email`, `password` 두 필드만 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 로컬 회원가입 요청 구조체
///
/// 호출자가 채우는 값은 `username`, `email`, `password` 뿐이며,
/// `socialProvider`는 직렬화 시 항상 `"LOCAL"`로 기록됩니다.
/// 역직렬화 입력에 다른 프로바이더가 있어도 무시됩니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 8,
        max = 32,
        message = "비밀번호는 8-32자 사이여야 합니다"
    ))]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn social_provider(&self) -> AuthProvider {
        AuthProvider::Local
    }
}

impl Serialize for RegisterRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RegisterRequest", 4)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", &self.password)?;
        state.serialize_field("socialProvider", &self.social_provider())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_has_only_credentials() {
        let body = serde_json::to_value(LoginRequest::new("user@example.com", "secret")).unwrap();

        assert_eq!(body, json!({ "email": "user@example.com", "password": "secret" }));
    }

    #[test]
    fn test_register_request_always_local() {
        let body = serde_json::to_value(RegisterRequest::new("kim", "kim@example.com", "password1")).unwrap();

        assert_eq!(
            body,
            json!({
                "username": "kim",
                "email": "kim@example.com",
                "password": "password1",
                "socialProvider": "LOCAL"
            })
        );
    }

    #[test]
    fn test_register_request_ignores_injected_provider() {
        let input = json!({
            "username": "kim",
            "email": "kim@example.com",
            "password": "password1",
            "socialProvider": "GOOGLE"
        });

        let request: RegisterRequest = serde_json::from_value(input).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["socialProvider"], "LOCAL");
    }

    #[test]
    fn test_login_request_validation() {
        assert!(LoginRequest::new("user@example.com", "secret").validate().is_ok());
        assert!(LoginRequest::new("not-an-email", "secret").validate().is_err());
        assert!(LoginRequest::new("user@example.com", "").validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        assert!(RegisterRequest::new("kim", "kim@example.com", "password1").validate().is_ok());
        assert!(RegisterRequest::new("", "kim@example.com", "password1").validate().is_err());
        assert!(RegisterRequest::new("kim", "kim@example.com", "short").validate().is_err());
        assert!(RegisterRequest::new("kim", "kim@example.com", "p".repeat(33)).validate().is_err());
    }
}
