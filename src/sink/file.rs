use crate::core::{Result, Sink};
use async_trait::async_trait;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Writes each element as one JSON document per line. The file is created on
/// the first write, truncating any previous contents.
pub struct JsonLinesSink<T> {
    file_path: String,
    writer: Option<BufWriter<tokio::fs::File>>,
    _marker: PhantomData<fn(T)>,
}

impl<T> JsonLinesSink<T> {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_string_lossy().into_owned(),
            writer: None,
            _marker: PhantomData,
        }
    }

    async fn ensure_writer(&mut self) -> Result<()> {
        if self.writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.file_path)
                .await?;
            self.writer = Some(BufWriter::new(file));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Serialize + Send + Sync + 'static> Sink for JsonLinesSink<T> {
    type Item = T;

    async fn write(&mut self, element: T) -> Result<()> {
        self.ensure_writer().await?;

        let json_line = serde_json::to_string(&element)?;

        if let Some(ref mut writer) = self.writer {
            writer.write_all(json_line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().await?;
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.flush().await?;
        self.writer = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("streamkit-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn writes_one_document_per_line() {
        let path = temp_path("sink.jsonl");
        let mut sink: JsonLinesSink<Vec<i64>> = JsonLinesSink::new(&path);

        sink.write(vec![1, 2, 3]).await.unwrap();
        sink.write(vec![4]).await.unwrap();
        sink.close().await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "[1,2,3]\n[4]\n");
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
