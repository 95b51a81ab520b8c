//! Fatal application errors and their exit codes

use skiff_render::ContextError;

use crate::systems::WindowError;

/// An error that stops the program
#[derive(Debug)]
pub enum AppError {
    /// The event loop could not start or failed while running
    EventLoop(String),
    /// The window could not be created
    Window(WindowError),
    /// The GPU context could not be created
    Graphics(ContextError),
    /// The GPU ran out of memory mid-run
    OutOfMemory,
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::EventLoop(_) => 1,
            AppError::Window(_) => 2,
            AppError::Graphics(_) => 3,
            AppError::OutOfMemory => 4,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::EventLoop(msg) => write!(f, "Event loop error: {}", msg),
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Graphics(e) => write!(f, "{}", e),
            AppError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Window(e) => Some(e),
            AppError::Graphics(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<ContextError> for AppError {
    fn from(e: ContextError) -> Self {
        AppError::Graphics(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            AppError::EventLoop("boom".to_string()),
            AppError::Window(WindowError::CreationFailed("no display".to_string())),
            AppError::Graphics(ContextError::NoAdapter),
            AppError::OutOfMemory,
        ];
        let codes: Vec<i32> = errors.iter().map(AppError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display_includes_cause() {
        let err: AppError = ContextError::Device("lost".to_string()).into();
        assert!(err.to_string().contains("lost"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
