//! # Authentication Provider Configuration
//!
//! 회원가입 시 전송되는 인증 프로바이더 태그와
//! 소셜 로그인 리디렉션 대상 프로바이더를 정의합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 (`LOCAL`)
//! 2. **OAuth 2.0**: Google, Facebook, GitHub, LinkedIn
//!
//! 로컬 회원가입 요청의 `socialProvider` 값은 항상 [`AuthProvider::Local`] 입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use linguarium_client::config::{EndpointConfig, OAuthProvider};
//!
//! let provider: OAuthProvider = "github".parse()?;
//! let url = config.oauth_url(provider);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 백엔드가 인식하는 인증 프로바이더 태그
///
/// JSON 에서는 대문자 문자열(`"LOCAL"`, `"GOOGLE"` ...)로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    Local,
    Google,
    Facebook,
    GitHub,
    LinkedIn,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "LOCAL",
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Facebook => "FACEBOOK",
            AuthProvider::GitHub => "GITHUB",
            AuthProvider::LinkedIn => "LINKEDIN",
        }
    }
}

/// 소셜 로그인 리디렉션을 제공하는 OAuth 2.0 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
    GitHub,
    LinkedIn,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 4] = [
        OAuthProvider::Google,
        OAuthProvider::Facebook,
        OAuthProvider::GitHub,
        OAuthProvider::LinkedIn,
    ];

    /// 리디렉션 URL 경로에 들어가는 소문자 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::GitHub => "github",
            OAuthProvider::LinkedIn => "linkedin",
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            "github" => Ok(OAuthProvider::GitHub),
            "linkedin" => Ok(OAuthProvider::LinkedIn),
            _ => Err(format!("Unsupported OAuth provider: {}", s)),
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OAuthProvider> for AuthProvider {
    fn from(provider: OAuthProvider) -> Self {
        match provider {
            OAuthProvider::Google => AuthProvider::Google,
            OAuthProvider::Facebook => AuthProvider::Facebook,
            OAuthProvider::GitHub => AuthProvider::GitHub,
            OAuthProvider::LinkedIn => AuthProvider::LinkedIn,
        }
    }
}
