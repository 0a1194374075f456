use crate::core::{ElementStream, Result, Source, StreamError};
use async_trait::async_trait;
use csv::ReaderBuilder;
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use std::io::Cursor;
use std::marker::PhantomData;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

pub struct CsvSource<T> {
    file_path: String,
    has_header: bool,
    delimiter: u8,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CsvSource<T> {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_string_lossy().into_owned(),
            has_header: true,
            delimiter: b',',
            _marker: PhantomData,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

#[async_trait]
impl<T> Source for CsvSource<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Item = T;

    async fn open(&self) -> Result<ElementStream<T>> {
        // The csv reader is synchronous, so the file is slurped up front and
        // records are decoded lazily as the stream is pulled.
        let raw = tokio::fs::read(&self.file_path).await?;
        let records = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .from_reader(Cursor::new(raw))
            .into_deserialize::<T>()
            .map(|record| record.map_err(StreamError::from));
        Ok(Box::pin(stream::iter(records)))
    }
}

pub struct JsonLinesSource<T> {
    file_path: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonLinesSource<T> {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_string_lossy().into_owned(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Source for JsonLinesSource<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Item = T;

    async fn open(&self) -> Result<ElementStream<T>> {
        let file = File::open(&self.file_path).await?;
        let reader = BufReader::new(file);
        let lines = LinesStream::new(reader.lines());

        let stream = lines.map(|line_result| match line_result {
            Ok(line) => serde_json::from_str::<T>(&line).map_err(StreamError::from),
            Err(e) => Err(StreamError::Io(e)),
        });

        Ok(Box::pin(stream))
    }

    fn capacity(&self) -> usize {
        16
    }
}
