use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 사용자 프로필 응답 DTO
///
/// `id`는 필수이며, 나머지 필드는 응답에 없을 수 있으므로 기본값으로 채웁니다.
/// `id`가 없는 응답은 역직렬화 에러가 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// 연속 학습 일수
    #[serde(default)]
    pub streak: i32,

    #[serde(default)]
    pub daily_goal: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDateTime>,

    /// UI 언어 코드 (예: `EN`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_lang: Option<String>,

    #[serde(default)]
    pub friendship_requests_blocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_profile_decoding() {
        let body = json!({
            "id": 7,
            "username": "kim",
            "email": "kim@example.com",
            "profilePicLink": "https://cdn.example.com/kim.png",
            "background": "blue",
            "streak": 12,
            "dailyGoal": 5,
            "lastLogin": "2024-03-01T09:30:00",
            "uiLang": "EN",
            "friendshipRequestsBlocked": true
        });

        let profile: UserProfile = serde_json::from_value(body).unwrap();

        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "kim");
        assert_eq!(profile.profile_pic_link.as_deref(), Some("https://cdn.example.com/kim.png"));
        assert_eq!(profile.streak, 12);
        assert_eq!(profile.last_login.map(|t| t.to_string()), Some("2024-03-01 09:30:00".to_string()));
        assert!(profile.friendship_requests_blocked);
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({ "id": 3, "username": "lee" })).unwrap();

        assert_eq!(profile.id, 3);
        assert_eq!(profile.email, "");
        assert_eq!(profile.last_login, None);
        assert!(!profile.friendship_requests_blocked);
    }

    #[test]
    fn test_profile_without_id_is_rejected() {
        let result = serde_json::from_str::<UserProfile>(r#"{"username":"x"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let profile: UserProfile =
            serde_json::from_value(json!({ "id": 1, "roles": ["USER"], "vocabularyLevel": 5.5 })).unwrap();

        assert_eq!(profile.id, 1);
    }
}
