use crate::core::{LoadOutcome, NewTopic, SubmitOutcome, TitleInput, TopicApi, TopicListView};

/// 主題列表控制器：載入列表、送出新主題、成功後重新載入
pub struct TopicListController<A: TopicApi, V: TopicListView, I: TitleInput> {
    api: A,
    list: V,
    input: I,
}

impl<A: TopicApi, V: TopicListView, I: TitleInput> TopicListController<A, V, I> {
    pub fn new(api: A, list: V, input: I) -> Self {
        Self { api, list, input }
    }

    pub fn list(&self) -> &V {
        &self.list
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// 頁面就緒時呼叫一次
    pub async fn start(&self) -> LoadOutcome {
        tracing::info!("🚀 Loading topics");
        self.load_topics().await
    }

    pub async fn load_topics(&self) -> LoadOutcome {
        let topics = match self.api.list_topics().await {
            Ok(topics) => topics,
            Err(e) => {
                // 失敗時保留上一次的畫面
                tracing::warn!("Topic list not refreshed: {}", e);
                return LoadOutcome::Unchanged;
            }
        };

        self.list.clear();
        for topic in &topics {
            self.list.append_line(&topic.titre);
        }

        tracing::debug!("Rendered {} topics", topics.len());
        LoadOutcome::Rendered(topics.len())
    }

    /// 表單送出：讀取輸入框目前的值
    pub async fn submit(&self) -> SubmitOutcome {
        let raw = self.input.value();
        self.submit_topic(&raw).await
    }

    pub async fn submit_topic(&self, raw_input: &str) -> SubmitOutcome {
        let Some(topic) = NewTopic::from_input(raw_input) else {
            tracing::debug!("Empty title, nothing submitted");
            return SubmitOutcome::Skipped;
        };

        match self.api.create_topic(&topic).await {
            Ok(()) => {
                tracing::info!("✅ Topic created: {}", topic.titre);
                self.input.clear();
                SubmitOutcome::Created(self.load_topics().await)
            }
            Err(e) => {
                // 輸入框與列表都保持不變
                tracing::warn!("Topic '{}' not created: {}", topic.titre, e);
                SubmitOutcome::Rejected
            }
        }
    }
}
