//! Convenient re-exports for working with the bundled service definitions.
//!
//! ## Examples
//!
//! ```
//! use quill_definitions::prelude::*;
//!
//! let service = define_taskhub_service();
//! assert_eq!(service.name, "TaskHub");
//! ```

pub use crate::status::define_status_service;
pub use crate::taskhub::define_taskhub_service;

pub use quill_define::prelude::*;
