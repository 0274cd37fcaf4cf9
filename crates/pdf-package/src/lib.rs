mod assemble;
mod catalog;
pub mod merge;
mod source;
mod state;
mod types;

pub use assemble::{
    AssemblyOptions, AssemblyReport, SkippedSource, assemble_package, build_package, load_pdf,
    save_pdf,
};
pub use catalog::{Catalog, CatalogEntry};
pub use merge::merge_documents;
pub use source::{DocumentSource, fetch_source, http_client};
pub use state::{PackageItem, PackageState};
pub use types::*;
