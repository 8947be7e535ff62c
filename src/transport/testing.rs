//! 테스트용 기록 전송 계층

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{ClientError, ClientResult};
use crate::transport::http_transport::{ApiRequest, HttpTransport, RawResponse};

/// 보낸 요청을 기록하고 미리 준비한 응답을 순서대로 돌려주는 전송 계층
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<ClientResult<RawResponse>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: ClientError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no reply queued".to_string())))
    }
}
