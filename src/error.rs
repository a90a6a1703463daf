use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}
