use serde::{Deserialize, Deserializer, Serialize};

/// 伺服器回傳的主題；除了 `titre` 以外的欄位一律忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, deserialize_with = "titre_as_text")]
    pub titre: String,
}

/// 任何 JSON 值都當成文字顯示：null 為空字串，數字與布林照原樣
fn titre_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// POST 建立主題時送出的內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopic {
    pub titre: String,
}

impl NewTopic {
    /// 去除前後空白 (含 BOM)；空字串回傳 `None`
    pub fn from_input(raw: &str) -> Option<Self> {
        let titre = raw.trim_matches(is_blank);
        if titre.is_empty() {
            None
        } else {
            Some(Self {
                titre: titre.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 列表已整個替換，內含幾筆主題
    Rendered(usize),
    /// 請求或解析失敗，畫面維持原樣
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 輸入只有空白，沒有送出請求
    Skipped,
    /// 建立成功，輸入已清空並重新載入
    Created(LoadOutcome),
    /// 伺服器拒絕或連線失敗，什麼都不做
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_ignores_extra_fields() {
        let topics: Vec<Topic> = serde_json::from_value(serde_json::json!([
            {"id": 3, "titre": "Rust", "content": "...", "created_at": "2024-01-01"},
            {"titre": "Flask"}
        ]))
        .unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].titre, "Rust");
        assert_eq!(topics[1].titre, "Flask");
    }

    #[test]
    fn test_topic_without_titre_renders_empty() {
        let topic: Topic = serde_json::from_value(serde_json::json!({"id": 1})).unwrap();
        assert_eq!(topic.titre, "");
    }

    #[test]
    fn test_non_string_titre_does_not_discard_list() {
        let topics: Vec<Topic> = serde_json::from_value(serde_json::json!([
            {"titre": null},
            {"titre": 5},
            {"titre": true},
            {"titre": "Texte"}
        ]))
        .unwrap();

        let titres: Vec<&str> = topics.iter().map(|t| t.titre.as_str()).collect();
        assert_eq!(titres, vec!["", "5", "true", "Texte"]);
    }

    #[test]
    fn test_new_topic_trims_input() {
        let topic = NewTopic::from_input("  New Topic  ").unwrap();
        assert_eq!(topic.titre, "New Topic");
        assert_eq!(
            serde_json::to_value(&topic).unwrap(),
            serde_json::json!({"titre": "New Topic"})
        );
    }

    #[test]
    fn test_new_topic_rejects_blank_input() {
        assert!(NewTopic::from_input("").is_none());
        assert!(NewTopic::from_input("   ").is_none());
        assert!(NewTopic::from_input("\t\n ").is_none());
        assert!(NewTopic::from_input("\u{FEFF}").is_none());
        assert!(NewTopic::from_input(" \u{FEFF}\u{00A0} ").is_none());
    }

    #[test]
    fn test_new_topic_strips_bom_around_title() {
        let topic = NewTopic::from_input("\u{FEFF} Sujet \u{FEFF}").unwrap();
        assert_eq!(topic.titre, "Sujet");
    }
}
