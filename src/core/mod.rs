pub mod controller;

pub use crate::domain::model::{LoadOutcome, NewTopic, SubmitOutcome, Topic};
pub use crate::domain::ports::{ConfigProvider, TitleInput, TopicApi, TopicListView};
pub use crate::utils::error::Result;
