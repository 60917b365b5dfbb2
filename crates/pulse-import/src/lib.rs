pub mod project;
pub mod session;
pub mod sink;

pub use project::{PREVIEW_ROWS, project, project_preview};
pub use session::{ImportSession, ImportStep};
pub use sink::{InMemorySink, RecordSink};
