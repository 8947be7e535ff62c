//! # 사용자 리소스 서비스
//!
//! 인증된 사용자의 프로필 조회, 계정 삭제, ID 기반 조회를 담당합니다.
//! 각 호출은 서로 독립적이며 상태를 갖지 않습니다.
//! 인증 헤더는 전송 계층이 세션에서 읽어 붙입니다.

use std::sync::Arc;

use crate::config::EndpointConfig;
use crate::domain::dto::users::UserProfile;
use crate::errors::ClientResult;
use crate::transport::{ApiRequest, HttpTransport};

pub struct UserService {
    transport: Arc<dyn HttpTransport>,
    config: Arc<EndpointConfig>,
}

impl UserService {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<EndpointConfig>) -> Self {
        Self { transport, config }
    }

    /// 현재 로그인한 사용자의 프로필 (`GET {API_URL}user/me`)
    ///
    /// 인증되지 않았다면 서버의 401 응답이 그대로 에러로 전달됩니다.
    pub async fn get_current_user(&self) -> ClientResult<UserProfile> {
        let request = ApiRequest::get(self.config.user_url("me"));

        self.transport.send(request).await?.error_for_status()?.json()
    }

    /// 현재 계정을 삭제합니다 (`DELETE {API_URL}user/delete`).
    ///
    /// 되돌릴 수 없는 작업이며 확인 절차는 호출자(UI)의 책임입니다.
    /// 응답 본문은 JSON 으로 해석하지 않고 문자열 그대로 반환합니다.
    pub async fn delete_account(&self) -> ClientResult<String> {
        let request = ApiRequest::delete(self.config.user_url("delete")).expect_text();

        let body = self.transport.send(request).await?.error_for_status()?.text();
        log::warn!("🗑️ 계정 삭제 요청 완료");

        Ok(body)
    }

    /// ID로 사용자 프로필을 조회합니다 (`GET {API_URL}user/{id}`).
    ///
    /// 존재하지 않는 ID는 서버가 판단하며(예: 404) 에러로 전달됩니다.
    pub async fn get_account_by_id(&self, id: i64) -> ClientResult<UserProfile> {
        let request = ApiRequest::get(self.config.user_url(id));

        self.transport.send(request).await?.error_for_status()?.json()
    }
}
