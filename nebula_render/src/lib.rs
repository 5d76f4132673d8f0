/*!
# Nebula Render

Backend-agnostic core for the Nebula render-pass construction library.

This crate provides the platform-independent description of a render pass:
the render-target layout (attachments, references, subpass hints, multiview
count), plus the error and logging subsystems shared by every backend.
Backend implementations (Vulkan) consume these types read-only and derive
API-specific render-pass objects from them.

## Architecture

- **RenderTargetLayout**: complete attachment-set description, populated upstream
- **AttachmentDesc / AttachmentRef**: per-attachment wire data and index references
- **SubpassHint**: optional subpasses requested in addition to the main subpass
- **Error / Result**: library-wide error handling
- **log**: pluggable logger with severity levels and colored console default
*/

// Internal modules
mod error;
pub mod log;
pub mod layout;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Layout sub-module with all render-target layout types
    pub mod layout {
        pub use crate::layout::*;
    }
}
