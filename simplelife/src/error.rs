// error.rs - Error type shared by every board operation

#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("cannot allocate a {size_x}x{size_y} board")]
    Allocation { size_x: usize, size_y: usize },

    #[error("cell ({x}, {y}) is outside the {size_x}x{size_y} board")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        size_x: usize,
        size_y: usize,
    },

    #[error("seed density {0} is not a probability")]
    Density(f64),

    #[error("a {size_x}x{size_y} board does not fit in an image")]
    ImageDimensions { size_x: usize, size_y: usize },

    #[error("column stepper called from inside an async runtime; await step_columns instead")]
    NestedRuntime,

    #[error("pattern cell offset overflows origin ({x}, {y})")]
    OriginOverflow { x: usize, y: usize },

    #[error("column worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
