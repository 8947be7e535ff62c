use serde::{Deserialize, Serialize};

use super::user_response::UserProfile;

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtAuthResponse {
    pub access_token: String,

    /// 로그인한 사용자 정보 (백엔드 버전에 따라 생략될 수 있음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserProfile>,
}

/// 성공 여부와 메시지만 담은 응답 (회원가입 등)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,

    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_jwt_response_with_user_info() {
        let response: JwtAuthResponse = serde_json::from_value(json!({
            "accessToken": "xxx.yyy.zzz",
            "userInfo": { "id": 1, "username": "john" }
        }))
        .unwrap();

        assert_eq!(response.access_token, "xxx.yyy.zzz");
        assert_eq!(response.user_info.map(|u| u.username), Some("john".to_string()));
    }

    #[test]
    fn test_jwt_response_without_user_info() {
        let response: JwtAuthResponse = serde_json::from_value(json!({ "accessToken": "t" })).unwrap();

        assert_eq!(response.user_info, None);
    }

    #[test]
    fn test_api_message_decoding() {
        let message: ApiMessage =
            serde_json::from_value(json!({ "success": true, "message": "User registered successfully" }))
                .unwrap();

        assert!(message.success);
        assert_eq!(message.message, "User registered successfully");
    }
}
