//! Порты отправки: HTTP-транспорт и таймер.
//!
//! В браузере реализуются через fetch и setTimeout, в тестах подменяются.
//! Всё выполняется в одном потоке, поэтому `?Send`.

use async_trait::async_trait;
use std::time::Duration;

/// Сетевая ошибка (запрос не завершился). HTTP-статус ошибкой не считается.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait WebhookTransport {
    /// POST `body` как `application/json`, вернуть HTTP-статус ответа
    async fn post_json(&self, url: &str, body: &str) -> Result<u16, TransportError>;
}

#[async_trait(?Send)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}
