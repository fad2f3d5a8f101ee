#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    NoSlides,
    IndexOutOfRange { index: usize, count: usize },
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::NoSlides => write!(f, "carousel has no slides"),
            CarouselError::IndexOutOfRange { index, count } => {
                write!(f, "slide index {index} out of range for {count} slides")
            }
        }
    }
}

impl std::error::Error for CarouselError {}
