pub mod batch;
pub mod coerce;
pub mod error;
pub mod normalize;
pub mod resolve;

pub use batch::{locate_records, normalize_batch, normalize_json_str};
pub use error::IngestError;
pub use normalize::{
    normalize_map, normalize_record, normalize_record_at, NormalizeOptions, RecordSource,
};
pub use resolve::{normalize_key, resolve_field, RawRecord};
