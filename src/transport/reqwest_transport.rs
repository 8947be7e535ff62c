use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::errors::{ClientError, ClientResult};
use crate::transport::http_transport::{ApiRequest, HttpMethod, HttpTransport, RawResponse, ResponseFormat};
use crate::transport::session::SessionStore;

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

/// `reqwest` 기반 전송 계층
///
/// DELETE 를 제외한 요청에 `Content-Type: application/json` 헤더를 붙이고,
/// 세션에 토큰이 있으면 Bearer 인증 헤더를 추가합니다.
pub struct ReqwestTransport {
    client: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ReqwestTransport {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self::with_client(reqwest::Client::new(), session)
    }

    pub fn with_client(client: reqwest::Client, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    fn build_request(&self, request: &ApiRequest) -> ClientResult<reqwest::Request> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        let accept = match request.response_format {
            ResponseFormat::Json => APPLICATION_JSON,
            ResponseFormat::Text => TEXT_PLAIN,
        };

        let mut builder = builder.header(ACCEPT, accept);

        // DELETE 는 평문 응답만 기대하므로 Content-Type 을 보내지 않음
        if request.method != HttpMethod::Delete {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON);
        }

        if let Some(authorization) = self.session.authorization_header() {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|e| ClientError::Transport(format!("{} {} 요청 생성 실패: {}", request.method.as_str(), request.url, e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let http_request = self.build_request(&request)?;

        log::debug!("➡️ {} {}", request.method.as_str(), request.url);

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| ClientError::Transport(format!("{} {} 요청 실패: {}", request.method.as_str(), request.url, e)))?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("⬅️ {} {} → {}", request.method.as_str(), request.url, status);

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header<'a>(request: &'a reqwest::Request, name: reqwest::header::HeaderName) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_json_request_headers() {
        let transport = ReqwestTransport::new(Arc::new(SessionStore::new()));
        let request = ApiRequest::post_json("http://localhost:8080/api/auth/login", &json!({ "email": "a" })).unwrap();

        let built = transport.build_request(&request).unwrap();

        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://localhost:8080/api/auth/login");
        assert_eq!(header(&built, CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(header(&built, ACCEPT), Some(APPLICATION_JSON));
        assert_eq!(header(&built, AUTHORIZATION), None);
        assert_eq!(built.headers().get_all(CONTENT_TYPE).iter().count(), 1);

        let body = built.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(serde_json::from_slice::<serde_json::Value>(body).unwrap(), json!({ "email": "a" }));
    }

    #[test]
    fn test_text_request_accepts_plain_text() {
        let transport = ReqwestTransport::new(Arc::new(SessionStore::new()));
        let request = ApiRequest::delete("http://localhost:8080/api/user/delete").expect_text();

        let built = transport.build_request(&request).unwrap();

        assert_eq!(built.method(), &reqwest::Method::DELETE);
        assert_eq!(header(&built, ACCEPT), Some(TEXT_PLAIN));
        assert!(built.headers().get(CONTENT_TYPE).is_none());
        assert!(built.body().is_none());
    }

    #[test]
    fn test_get_request_sends_json_content_type() {
        let transport = ReqwestTransport::new(Arc::new(SessionStore::new()));

        let built = transport.build_request(&ApiRequest::get("http://localhost:8080/api/user/42")).unwrap();

        assert_eq!(header(&built, CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(header(&built, ACCEPT), Some(APPLICATION_JSON));
    }

    #[test]
    fn test_session_token_becomes_bearer_header() {
        let session = Arc::new(SessionStore::with_token("xxx.yyy.zzz"));
        let transport = ReqwestTransport::new(session.clone());

        let built = transport.build_request(&ApiRequest::get("http://localhost:8080/api/user/me")).unwrap();
        assert_eq!(header(&built, AUTHORIZATION), Some("Bearer xxx.yyy.zzz"));

        session.clear();
        let built = transport.build_request(&ApiRequest::get("http://localhost:8080/api/user/me")).unwrap();
        assert_eq!(header(&built, AUTHORIZATION), None);
    }

    #[test]
    fn test_invalid_url_is_transport_error() {
        let transport = ReqwestTransport::new(Arc::new(SessionStore::new()));

        let result = transport.build_request(&ApiRequest::get("not a url"));

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
