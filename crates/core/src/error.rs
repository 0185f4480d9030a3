#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
