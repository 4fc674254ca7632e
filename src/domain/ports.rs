use crate::domain::model::{NewTopic, Topic};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn topics_path(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

/// 主題集合端點 (GET 列表、POST 建立)
#[async_trait]
pub trait TopicApi: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<Topic>>;

    /// 非 2xx 回應視為錯誤；成功時不讀取回應內容
    async fn create_topic(&self, topic: &NewTopic) -> Result<()>;
}

/// 顯示主題的容器，每筆主題一行純文字
pub trait TopicListView: Send + Sync {
    fn clear(&self);
    fn append_line(&self, text: &str);
}

/// 單行標題輸入框
pub trait TitleInput: Send + Sync {
    fn value(&self) -> String;
    fn clear(&self);
}
