pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, Settings};

pub use adapters::http::HttpTopicApi;
pub use adapters::view::{BufferedList, TerminalList, TextInput};
pub use config::{ServerConfig, TomlConfig};
pub use core::controller::TopicListController;
pub use domain::model::{LoadOutcome, NewTopic, SubmitOutcome, Topic};
pub use utils::error::{Result, SujetsError};
