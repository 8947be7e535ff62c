//! 인증 세션 저장소
//!
//! 로그인으로 받은 액세스 토큰을 보관하고, 전송 계층이 요청마다
//! `Authorization: Bearer <token>` 헤더를 붙일 수 있게 합니다.

use std::sync::RwLock;

/// 현재 세션의 액세스 토큰 보관소
///
/// 요청 간에 공유되는 유일한 가변 상태입니다.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// 토큰이 없는(로그아웃 상태) 세션
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 발급받은 토큰으로 세션을 시작합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let session = SessionStore::with_token("xxx.yyy.zzz");
    /// assert_eq!(session.authorization_header().as_deref(), Some("Bearer xxx.yyy.zzz"));
    /// ```
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// 토큰을 저장합니다. 기존 토큰은 덮어씁니다.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(token.into());
    }

    /// 현재 토큰의 복사본
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 토큰을 제거하고 이전 값을 돌려줍니다.
    pub fn clear(&self) -> Option<String> {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.take()
    }

    /// 토큰 보유 여부. 토큰의 유효성은 서버만 판단합니다.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` 헤더 값
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let session = SessionStore::new();

        assert!(!session.is_authenticated());
        assert_eq!(session.authorization_header(), None);
    }

    #[test]
    fn test_set_and_clear_token() {
        let session = SessionStore::new();
        session.set_token("abc");

        assert!(session.is_authenticated());
        assert_eq!(session.authorization_header(), Some("Bearer abc".to_string()));

        assert_eq!(session.clear(), Some("abc".to_string()));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_with_token_replaced_by_newer_login() {
        let session = SessionStore::with_token("old");
        session.set_token("new");

        assert_eq!(session.token(), Some("new".to_string()));
    }
}
