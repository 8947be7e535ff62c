//! 컴포지션 루트
//!
//! 설정, 세션, 전송 계층, 서비스를 한 곳에서 생성하고 연결합니다.
//! 전역 서비스 로케이터 대신 모든 의존성이 생성자 시그니처에 드러납니다.
//!
//! ```text
//! EndpointConfig ─┐
//!                 ├─► AuthService
//! SessionStore ───┤
//!        │        └─► UserService
//!        ▼
//! ReqwestTransport
//! ```

use std::sync::Arc;

use crate::config::EndpointConfig;
use crate::errors::ClientResult;
use crate::services::auth::AuthService;
use crate::services::users::UserService;
use crate::transport::{HttpTransport, ReqwestTransport, SessionStore};

pub struct AppContext {
    config: Arc<EndpointConfig>,
    session: Arc<SessionStore>,
    auth_service: Arc<AuthService>,
    user_service: Arc<UserService>,
}

impl AppContext {
    /// 이미 만들어진 설정과 전송 계층으로 서비스를 연결합니다.
    pub fn new(
        config: Arc<EndpointConfig>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionStore>,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(transport.clone(), config.clone(), session.clone()));
        let user_service = Arc::new(UserService::new(transport, config.clone()));

        Self {
            config,
            session,
            auth_service,
            user_service,
        }
    }

    /// `reqwest` 전송 계층을 사용하는 기본 구성
    pub fn with_reqwest(config: EndpointConfig, session: SessionStore) -> Self {
        let config = Arc::new(config);
        let session = Arc::new(session);
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(session.clone()));

        Self::new(config, transport, session)
    }

    /// 환경 변수에서 설정을 읽어 기본 구성을 만듭니다.
    pub fn from_env(session: SessionStore) -> ClientResult<Self> {
        let config = EndpointConfig::from_env()?;
        log::info!("🌐 API base URL: {}", config.api_base_url());

        Ok(Self::with_reqwest(config, session))
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn session(&self) -> Arc<SessionStore> {
        self.session.clone()
    }

    pub fn auth_service(&self) -> Arc<AuthService> {
        self.auth_service.clone()
    }

    pub fn user_service(&self) -> Arc<UserService> {
        self.user_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::LoginRequest;
    use crate::transport::testing::RecordingTransport;

    #[tokio::test]
    async fn test_services_share_config_and_session() {
        let transport = Arc::new(
            RecordingTransport::new()
                .reply(200, r#"{"accessToken":"abc"}"#)
                .reply(200, r#"{"id":1}"#),
        );
        let config = Arc::new(EndpointConfig::new("http://x/", "http://x/login").unwrap());
        let context = AppContext::new(config, transport.clone(), Arc::new(SessionStore::new()));

        context
            .auth_service()
            .login(&LoginRequest::new("a@b.com", "pw"))
            .await
            .unwrap();
        context.user_service().get_current_user().await.unwrap();

        assert_eq!(context.session().token(), Some("abc".to_string()));
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["http://x/api/auth/login", "http://x/api/user/me"]);
    }

    #[test]
    fn test_with_reqwest_keeps_seeded_session() {
        let context = AppContext::with_reqwest(EndpointConfig::default(), SessionStore::with_token("seed"));

        assert!(context.auth_service().is_authenticated());
        assert_eq!(context.config().auth_api(), "http://localhost:8080/api/auth/");
    }
}
