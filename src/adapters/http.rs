use crate::domain::model::{NewTopic, Topic};
use crate::domain::ports::{ConfigProvider, TopicApi};
use crate::utils::error::{Result, SujetsError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// 以 reqwest 實作的主題集合端點
#[derive(Debug, Clone)]
pub struct HttpTopicApi {
    client: Client,
    endpoint: Url,
}

impl HttpTopicApi {
    pub fn new(base_url: &str, topics_path: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(base_url)?.join(topics_path)?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: Url::parse(config.base_url())?.join(config.topics_path())?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TopicApi for HttpTopicApi {
    async fn list_topics(&self) -> Result<Vec<Topic>> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self.client.get(self.endpoint.clone()).send().await?;

        // 狀態碼不檢查：只要內容是主題陣列就照樣顯示
        tracing::debug!("List response status: {}", response.status());
        let body = response.bytes().await?;
        let topics: Vec<Topic> = serde_json::from_slice(&body)?;

        Ok(topics)
    }

    async fn create_topic(&self, topic: &NewTopic) -> Result<()> {
        tracing::debug!("POST {} titre={:?}", self.endpoint, topic.titre);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(topic)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Create response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SujetsError::StatusError {
                status: status.as_u16(),
            })
        }
    }
}
