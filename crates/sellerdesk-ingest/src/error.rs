use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The payload decoded fine but holds no list of records anywhere the
    /// batch unwrapper looks.
    #[error("no array data found in payload")]
    NoTabularData,

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
