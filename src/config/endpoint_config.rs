//! 백엔드 엔드포인트 설정 관리 모듈
//!
//! 하나의 베이스 URL로부터 모든 API 엔드포인트와 OAuth 리디렉션 URL을 계산합니다.
//! 값은 생성 시점에 한 번만 계산되며 이후에는 변경되지 않습니다.
//!
//! ## 파생 규칙
//!
//! | 이름 | 값 |
//! |------|----|
//! | `API_URL` | `{base}api/` |
//! | `AUTH_API` | `{base}api/auth/` |
//! | `FRIEND_API` | `{base}api/friend/` |
//! | `LANG_API` | `{base}api/lang/` |
//! | `GOOGLE_AUTH_URL` | `{base}oauth2/authorization/google?redirect_uri={redirect}` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export API_BASE_URL="http://localhost:8080/"
//! export OAUTH_REDIRECT_URI="http://localhost:8081/login"
//! ```

use std::env;
use std::fmt::Display;

use crate::config::auth_config::OAuthProvider;
use crate::errors::{ClientError, ClientResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_OAUTH_REDIRECT_URI: &str = "http://localhost:8081/login";

const API_PATH: &str = "api/";
const OAUTH2_PATH: &str = "oauth2/authorization/";
const REDIRECT_QUERY: &str = "?redirect_uri=";

const FD_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2";
const FD_ENDPOINT: &str = "/entries";
const FD_LANG_CODE: &str = "/en/";

/// 불변 엔드포인트 레지스트리
///
/// 전역 정적 상수 대신 프로세스 시작 시 한 번 생성되어
/// 필요한 서비스에 `Arc`로 주입됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    api_base_url: String,
    oauth_redirect_uri: String,
    api_url: String,
    auth_api: String,
    friend_api: String,
    lang_api: String,
    users_api: String,
    oauth2_url: String,
    google_auth_url: String,
    facebook_auth_url: String,
    github_auth_url: String,
    linkedin_auth_url: String,
}

impl EndpointConfig {
    /// 베이스 URL과 OAuth 리디렉션 URI로 엔드포인트 집합을 계산합니다.
    ///
    /// 베이스 URL 끝에 `/`가 없으면 붙여서 정규화합니다.
    ///
    /// # Errors
    ///
    /// `http://` 또는 `https://`로 시작하지 않는 URL은 [`ClientError::Config`]를 반환합니다.
    pub fn new(api_base_url: &str, oauth_redirect_uri: &str) -> ClientResult<Self> {
        let api_base_url = normalize_base_url(api_base_url)?;

        Ok(Self::derive(api_base_url, oauth_redirect_uri.trim().to_string()))
    }

    fn derive(api_base_url: String, oauth_redirect_uri: String) -> Self {
        let api_url = format!("{}{}", api_base_url, API_PATH);
        let oauth2_url = format!("{}{}", api_base_url, OAUTH2_PATH);
        let provider_url = |provider: OAuthProvider| {
            format!("{}{}{}{}", oauth2_url, provider.as_str(), REDIRECT_QUERY, oauth_redirect_uri)
        };

        Self {
            auth_api: format!("{}auth/", api_url),
            friend_api: format!("{}friend/", api_url),
            lang_api: format!("{}lang/", api_url),
            users_api: format!("{}user/", api_url),
            google_auth_url: provider_url(OAuthProvider::Google),
            facebook_auth_url: provider_url(OAuthProvider::Facebook),
            github_auth_url: provider_url(OAuthProvider::GitHub),
            linkedin_auth_url: provider_url(OAuthProvider::LinkedIn),
            api_url,
            oauth2_url,
            api_base_url,
            oauth_redirect_uri,
        }
    }

    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// 값이 없으면 경고 로그를 남기고 로컬 개발용 기본값을 사용합니다.
    ///
    /// # 환경 변수
    ///
    /// - `API_BASE_URL` (기본값 `http://localhost:8080/`)
    /// - `OAUTH_REDIRECT_URI` (기본값 `http://localhost:8081/login`)
    pub fn from_env() -> ClientResult<Self> {
        let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| {
            log::warn!("API_BASE_URL not set, using default {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        });
        let oauth_redirect_uri = env::var("OAUTH_REDIRECT_URI").unwrap_or_else(|_| {
            log::warn!("OAUTH_REDIRECT_URI not set, using default {}", DEFAULT_OAUTH_REDIRECT_URI);
            DEFAULT_OAUTH_REDIRECT_URI.to_string()
        });

        Self::new(&api_base_url, &oauth_redirect_uri)
    }

    /// 정규화된 API 기본 URL (항상 `/`로 끝남)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// 소셜 로그인 완료 후 브라우저가 돌아올 프론트엔드 주소
    pub fn oauth_redirect_uri(&self) -> &str {
        &self.oauth_redirect_uri
    }

    /// `API_URL`: 모든 REST 엔드포인트의 공통 접두사
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `AUTH_API`: 로그인/회원가입 엔드포인트 접두사
    pub fn auth_api(&self) -> &str {
        &self.auth_api
    }

    /// `FRIEND_API`: 친구 관련 엔드포인트 접두사 (`{API_URL}friend/`)
    pub fn friend_api(&self) -> &str {
        &self.friend_api
    }

    /// `LANG_API`: 언어 관련 엔드포인트 접두사 (`{API_URL}lang/`)
    pub fn lang_api(&self) -> &str {
        &self.lang_api
    }

    /// 사용자 리소스 접두사 (`{API_URL}user/`)
    pub fn users_api(&self) -> &str {
        &self.users_api
    }

    /// OAuth2 인가 시작 경로 (`{API_BASE_URL}oauth2/authorization/`)
    ///
    /// `API_URL` 아래가 아니라 기본 URL 바로 아래에 위치합니다.
    pub fn oauth2_url(&self) -> &str {
        &self.oauth2_url
    }

    /// Google 소셜 로그인 리디렉션 URL
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = EndpointConfig::default();
    /// assert_eq!(
    ///     config.google_auth_url(),
    ///     "http://localhost:8080/oauth2/authorization/google?redirect_uri=http://localhost:8081/login"
    /// );
    /// ```
    pub fn google_auth_url(&self) -> &str {
        &self.google_auth_url
    }

    /// Facebook 소셜 로그인 리디렉션 URL
    pub fn facebook_auth_url(&self) -> &str {
        &self.facebook_auth_url
    }

    /// GitHub 소셜 로그인 리디렉션 URL
    pub fn github_auth_url(&self) -> &str {
        &self.github_auth_url
    }

    /// LinkedIn 소셜 로그인 리디렉션 URL
    pub fn linkedin_auth_url(&self) -> &str {
        &self.linkedin_auth_url
    }

    /// 소셜 로그인 프로바이더의 리디렉션 대상 URL을 반환합니다.
    ///
    /// 페치 대상이 아니라 브라우저가 이동할 네비게이션 URL입니다.
    pub fn oauth_url(&self, provider: OAuthProvider) -> &str {
        match provider {
            OAuthProvider::Google => &self.google_auth_url,
            OAuthProvider::Facebook => &self.facebook_auth_url,
            OAuthProvider::GitHub => &self.github_auth_url,
            OAuthProvider::LinkedIn => &self.linkedin_auth_url,
        }
    }

    /// 사용자 리소스 URL: 접두사와 경로 조각을 그대로 이어 붙입니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(config.user_url(42), "http://localhost:8080/api/user/42");
    /// ```
    pub fn user_url(&self, path: impl Display) -> String {
        format!("{}{}", self.users_api, path)
    }

    /// 인증 엔드포인트 URL (`{AUTH_API}{path}`)
    ///
    /// # Arguments
    ///
    /// * `path` - `"login"`, `"register"` 같은 경로 조각
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{}", self.auth_api, path)
    }

    /// Free Dictionary API의 영어 단어 조회 URL
    pub fn free_dictionary_url(&self, word: &str) -> String {
        format!(
            "{}{}{}{}",
            FD_BASE_URL,
            FD_ENDPOINT,
            FD_LANG_CODE,
            urlencoding::encode(word.trim())
        )
    }

    /// 이름과 URL 쌍 목록 (CLI 출력용)
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("API_URL", self.api_url()),
            ("AUTH_API", self.auth_api()),
            ("FRIEND_API", self.friend_api()),
            ("LANG_API", self.lang_api()),
            ("GOOGLE_AUTH_URL", self.google_auth_url()),
            ("FACEBOOK_AUTH_URL", self.facebook_auth_url()),
            ("GITHUB_AUTH_URL", self.github_auth_url()),
            ("LINKEDIN_AUTH_URL", self.linkedin_auth_url()),
        ]
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::derive(DEFAULT_API_BASE_URL.to_string(), DEFAULT_OAUTH_REDIRECT_URI.to_string())
    }
}

fn normalize_base_url(raw: &str) -> ClientResult<String> {
    let trimmed = raw.trim();

    let Some(rest) = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
    else {
        return Err(ClientError::Config(format!(
            "API base URL must start with http:// or https://: {}", raw
        )));
    };

    if rest.is_empty() || rest.starts_with('/') {
        return Err(ClientError::Config(format!("API base URL has no host: {}", raw)));
    }

    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}/", trimmed))
    }
}
