//! # 로컬 인증 서비스
//!
//! 이메일/패스워드 로그인과 로컬 회원가입 요청을 백엔드로 전송합니다.
//!
//! - 호출당 정확히 한 번의 POST 요청
//! - 입력값 검증 없음 (폼 계층의 책임)
//! - 재시도, 타임아웃, 결과 캐싱 없음
//! - 실패는 해석하지 않고 그대로 호출자에게 전달
//!
//! 로그인에 성공하면 응답의 액세스 토큰을 [`SessionStore`]에 저장하여
//! 이후 요청에 Bearer 헤더가 붙도록 합니다.

use std::sync::Arc;

use crate::config::EndpointConfig;
use crate::domain::dto::users::{ApiMessage, JwtAuthResponse, LoginRequest, RegisterRequest};
use crate::errors::ClientResult;
use crate::transport::{ApiRequest, HttpTransport, SessionStore};

pub struct AuthService {
    transport: Arc<dyn HttpTransport>,
    config: Arc<EndpointConfig>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: Arc<EndpointConfig>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self { transport, config, session }
    }

    /// 이메일/패스워드로 로그인합니다.
    ///
    /// `POST {AUTH_API}login` 에 `{email, password}` 본문을 전송합니다.
    ///
    /// # Errors
    ///
    /// 네트워크 실패, 2xx 이외의 응답, 응답 파싱 실패를 그대로 반환합니다.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<JwtAuthResponse> {
        let request = ApiRequest::post_json(self.config.auth_url("login"), credentials)?;

        log::debug!("로그인 요청: {}", credentials.email);

        let response: JwtAuthResponse = self.transport.send(request).await?.error_for_status()?.json()?;

        self.session.set_token(response.access_token.clone());
        log::info!("🔐 로그인 성공: {}", credentials.email);

        Ok(response)
    }

    /// 로컬 계정으로 회원가입합니다.
    ///
    /// `POST {AUTH_API}register` 에 `{username, email, password, socialProvider: "LOCAL"}` 본문을 전송합니다.
    pub async fn register(&self, user: &RegisterRequest) -> ClientResult<ApiMessage> {
        let request = ApiRequest::post_json(self.config.auth_url("register"), user)?;

        log::debug!("회원가입 요청: {} <{}>", user.username, user.email);

        self.transport.send(request).await?.error_for_status()?.json()
    }

    /// 세션 토큰을 제거합니다. 네트워크 호출은 없습니다.
    pub fn logout(&self) -> bool {
        let had_token = self.session.clear().is_some();
        if had_token {
            log::info!("로그아웃: 세션 토큰 제거됨");
        }
        had_token
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
