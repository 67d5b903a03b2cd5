use thiserror::Error;

/// Errors emitted while building, querying or exporting a mask.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A size or parameter that cannot be used (e.g. a zero grid dimension).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A cell index outside `0..len`.
    #[error("index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
    /// The grid buffer could not be allocated.
    #[error("failed to allocate grid storage: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
    /// A dedicated worker pool could not be started.
    #[cfg(feature = "rayon")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Encoding or writing an image failed.
    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = MaskError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_failure_is_wrapped() {
        let err = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = MaskError::from(err);
        assert!(matches!(err, MaskError::Allocation(_)));
        assert!(err.to_string().starts_with("failed to allocate grid storage"));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn pool_failure_keeps_its_source() {
        // The global pool can only be set up once per process.
        let _ = rayon::ThreadPoolBuilder::new().build_global();
        let err = rayon::ThreadPoolBuilder::new()
            .build_global()
            .map_err(MaskError::from)
            .unwrap_err();

        assert!(matches!(err, MaskError::ThreadPool(_)));
        assert!(err.to_string().starts_with("failed to build thread pool"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
