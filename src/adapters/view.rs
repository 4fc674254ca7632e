use crate::domain::ports::{TitleInput, TopicListView};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 記憶體內的主題列表
#[derive(Debug, Default)]
pub struct BufferedList {
    lines: Mutex<Vec<String>>,
}

impl BufferedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// 把目前的列表一次寫出，每筆一行
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in lock(&self.lines).iter() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl TopicListView for BufferedList {
    fn clear(&self) {
        lock(&self.lines).clear();
    }

    fn append_line(&self, text: &str) {
        lock(&self.lines).push(text.to_string());
    }
}

/// 記憶體內的標題輸入框
#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(value.into()),
        }
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *lock(&self.value) = value.into();
    }
}

impl TitleInput for TextInput {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }

    fn clear(&self) {
        lock(&self.value).clear();
    }
}

/// 直接輸出到終端 (或任何 writer) 的主題列表；每次重繪都會重新印出整個列表
pub struct TerminalList<W: Write + Send> {
    writer: Mutex<W>,
    heading: Option<String>,
}

impl<W: Write + Send> TerminalList<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            heading: None,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, text: &str) {
        let mut writer = lock(&self.writer);
        if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            tracing::warn!("Failed to write topic line: {}", e);
        }
    }
}

impl<W: Write + Send> TopicListView for TerminalList<W> {
    fn clear(&self) {
        if let Some(heading) = &self.heading {
            self.write_line(heading);
        }
    }

    fn append_line(&self, text: &str) {
        self.write_line(text);
    }
}
