//! HTTP 전송 추상화
//!
//! 서비스 계층은 [`HttpTransport`] 트레이트에만 의존하므로
//! 테스트에서는 네트워크 없이 요청을 기록하는 구현으로 교체할 수 있습니다.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 호출자가 기대하는 응답 본문 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
}

/// 한 번의 HTTP 호출을 나타내는 요청 값
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub response_format: ResponseFormat,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: url.into(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// JSON 본문을 가진 POST 요청을 만듭니다.
    pub fn post_json<B: Serialize>(url: impl Into<String>, body: &B) -> ClientResult<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(serde_json::to_value(body)?),
            response_format: ResponseFormat::Json,
        })
    }

    pub fn expect_text(mut self) -> Self {
        self.response_format = ResponseFormat::Text;
        self
    }
}

/// 상태 코드와 가공되지 않은 본문
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 2xx 가 아니면 본문을 그대로 담은 [`ClientError::Status`]로 바꿉니다.
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(ClientError::from)
    }

    /// 본문을 해석하지 않고 문자열로 돌려줍니다.
    pub fn text(self) -> String {
        self.body
    }
}

/// 요청 하나를 보내고 응답 하나를 돌려주는 전송 계층
///
/// 반환되는 future 가 지연 결과 핸들이며, future 를 drop 하면 요청이 취소됩니다.
/// 타임아웃과 재시도는 이 트레이트의 책임이 아닙니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}
