use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Cover error: {0}")]
    Cover(#[from] pdf_cover::CoverError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No documents to assemble")]
    NoDocuments,
}

pub type Result<T> = std::result::Result<T, PackageError>;
