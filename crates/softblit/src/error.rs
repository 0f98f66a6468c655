use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("position ({x}, {y}) outside {width}x{height} surface")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },
    #[error("{component} component must be between 0 and 255, got {value}")]
    InvalidArgument { component: &'static str, value: i32 },
    #[error("malformed atlas: {0}")]
    AtlasMalformed(String),
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
