//! Конфигурация виджета
//!
//! Значения по умолчанию заданы константами, поверх них накладываются
//! переопределения со страницы-хоста. Разбор ошибок не даёт: поле неверного
//! типа просто считается незаданным. URL и id видео не валидируются и
//! передаются дальше как есть.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_BUTTON_COLOR: &str = "#4F46E5";
pub const DEFAULT_YOUTUBE_VIDEO_ID: &str = "your-video-id";
pub const DEFAULT_HEADER_TEXT: &str = "Refer a business to Clicki Referrals!";
pub const DEFAULT_REWARD_TEXT: &str = "Earn $25 per referral";

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("host configuration is invalid: {0}")]
    Host(String),
}

/// Итоговая конфигурация виджета. Не меняется после монтирования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub button_color: String,
    pub youtube_video_id: String,
    pub header_text: String,
    pub reward_text: String,
    /// Пустая строка = вебхук не настроен
    pub webhook_url_1: String,
    pub webhook_url_2: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            button_color: DEFAULT_BUTTON_COLOR.to_string(),
            youtube_video_id: DEFAULT_YOUTUBE_VIDEO_ID.to_string(),
            header_text: DEFAULT_HEADER_TEXT.to_string(),
            reward_text: DEFAULT_REWARD_TEXT.to_string(),
            webhook_url_1: String::new(),
            webhook_url_2: String::new(),
        }
    }
}

/// Частичная конфигурация, как её задаёт хост (`window.ClickiReferralConfig`).
///
/// Каждое поле разбирается отдельно: строка берётся как есть, число или bool
/// превращается в строку, всё остальное считается незаданным.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigOverrides {
    #[serde(default, deserialize_with = "lenient_string")]
    pub button_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub youtube_video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub header_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reward_text: Option<String>,
    #[serde(default, rename = "webhookUrl1", deserialize_with = "lenient_string")]
    pub webhook_url_1: Option<String>,
    #[serde(default, rename = "webhookUrl2", deserialize_with = "lenient_string")]
    pub webhook_url_2: Option<String>,
}

/// Любое значение в `Option<String>` без ошибки разбора
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

/// Список строк; нестроковые элементы отбрасываются, не-массив = не задан
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        // JS отдаёт все числа как f64: 123 приходит как 123.0
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Some(i.to_string()),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => Some((f as i64).to_string()),
            _ => Some(n.to_string()),
        },
        _ => None,
    }
}

impl WidgetConfig {
    /// Наложить переопределения хоста на значения по умолчанию.
    ///
    /// Отсутствующее или пустое поле берётся из defaults, id видео
    /// предварительно обрезается по пробелам.
    pub fn resolve(overrides: Option<&WidgetConfigOverrides>) -> Self {
        let defaults = Self::default();
        let Some(o) = overrides else {
            return defaults;
        };

        let video_id = o.youtube_video_id.as_deref().map(str::trim);

        Self {
            button_color: pick(o.button_color.as_deref(), defaults.button_color),
            youtube_video_id: pick(video_id, defaults.youtube_video_id),
            header_text: pick(o.header_text.as_deref(), defaults.header_text),
            reward_text: pick(o.reward_text.as_deref(), defaults.reward_text),
            webhook_url_1: pick(o.webhook_url_1.as_deref(), defaults.webhook_url_1),
            webhook_url_2: pick(o.webhook_url_2.as_deref(), defaults.webhook_url_2),
        }
    }

    pub fn video_embed_url(&self) -> String {
        format!("{}{}", YOUTUBE_EMBED_BASE, self.youtube_video_id)
    }

    /// Пара вебхуков в порядке вызова; ненастроенный (пустой) URL даёт `None`
    pub fn webhook_targets(&self) -> [Option<String>; 2] {
        [
            configured(&self.webhook_url_1),
            configured(&self.webhook_url_2),
        ]
    }
}

fn pick(value: Option<&str>, default: String) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default,
    }
}

fn configured(url: &str) -> Option<String> {
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.button_color, "#4F46E5");
        assert_eq!(config.youtube_video_id, "your-video-id");
        assert_eq!(config.header_text, "Refer a business to Clicki Referrals!");
        assert_eq!(config.reward_text, "Earn $25 per referral");
        assert_eq!(config.webhook_targets(), [None, None]);
    }

    #[test]
    fn test_missing_overrides_resolve_to_defaults() {
        let resolved = WidgetConfig::resolve(None);
        let empty = WidgetConfig::resolve(Some(&WidgetConfigOverrides::default()));
        assert_eq!(resolved, WidgetConfig::default());
        assert_eq!(empty, resolved);
    }

    #[test]
    fn test_override_touches_only_its_field() {
        let overrides = WidgetConfigOverrides {
            button_color: Some("rebeccapurple".into()),
            ..Default::default()
        };
        let resolved = WidgetConfig::resolve(Some(&overrides));
        let defaults = WidgetConfig::default();

        assert_eq!(resolved.button_color, "rebeccapurple");
        assert_eq!(
            WidgetConfig {
                button_color: defaults.button_color.clone(),
                ..resolved
            },
            defaults
        );
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let overrides = WidgetConfigOverrides {
            header_text: Some(String::new()),
            youtube_video_id: Some("   ".into()),
            ..Default::default()
        };
        let resolved = WidgetConfig::resolve(Some(&overrides));
        assert_eq!(resolved.header_text, "Refer a business to Clicki Referrals!");
        assert_eq!(resolved.youtube_video_id, "your-video-id");
    }

    #[test]
    fn test_video_id_is_trimmed_but_not_validated() {
        let overrides = WidgetConfigOverrides {
            youtube_video_id: Some("  abc?x=<1>  ".into()),
            ..Default::default()
        };
        let resolved = WidgetConfig::resolve(Some(&overrides));
        assert_eq!(resolved.youtube_video_id, "abc?x=<1>");
        assert_eq!(
            resolved.video_embed_url(),
            "https://www.youtube.com/embed/abc?x=<1>"
        );
    }

    #[test]
    fn test_host_json_uses_camel_case_keys() {
        let overrides: WidgetConfigOverrides = serde_json::from_str(
            r#"{
                "buttonColor": "red",
                "rewardText": "Earn $50",
                "webhookUrl1": "https://hooks.example.com/a",
                "webhookUrl2": "not a url"
            }"#,
        )
        .unwrap();
        let resolved = WidgetConfig::resolve(Some(&overrides));

        assert_eq!(resolved.button_color, "red");
        assert_eq!(resolved.reward_text, "Earn $50");
        assert_eq!(
            resolved.webhook_targets(),
            [
                Some("https://hooks.example.com/a".to_string()),
                Some("not a url".to_string())
            ]
        );
    }

    #[test]
    fn test_wrong_typed_field_does_not_drop_the_rest() {
        let overrides: WidgetConfigOverrides = serde_json::from_str(
            r#"{
                "buttonColor": 123,
                "headerText": {"nested": true},
                "rewardText": null,
                "webhookUrl1": "https://hooks.test/a"
            }"#,
        )
        .unwrap();
        let resolved = WidgetConfig::resolve(Some(&overrides));

        assert_eq!(resolved.button_color, "123");
        assert_eq!(resolved.header_text, DEFAULT_HEADER_TEXT);
        assert_eq!(resolved.reward_text, DEFAULT_REWARD_TEXT);
        assert_eq!(
            resolved.webhook_targets(),
            [Some("https://hooks.test/a".to_string()), None]
        );
    }

    #[test]
    fn test_js_style_float_is_stringified_as_integer() {
        assert_eq!(
            scalar_to_string(&serde_json::json!(123.0)),
            Some("123".to_string())
        );
        assert_eq!(
            scalar_to_string(&serde_json::json!(1.5)),
            Some("1.5".to_string())
        );
        assert_eq!(scalar_to_string(&serde_json::json!(true)), Some("true".into()));
        assert_eq!(scalar_to_string(&serde_json::json!([1])), None);
    }
}
