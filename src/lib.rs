//! Temporal media fragments.
//!
//! Resolves `#t=start,end` fragments (NPT syntax) into validated time spans
//! and keeps a playback handle inside such a span, either once (jump and
//! stop) or for the handle's whole lifetime (clamp or loop).
//!
//! ```
//! use tfrag::fragment::FragmentQuery;
//! use tfrag::span::extract_time_span;
//!
//! let span = extract_time_span(&FragmentQuery::parse("t=npt:1:02:03,1:05:00")).unwrap();
//! assert_eq!(span.start(), 3723.0);
//! assert_eq!(span.end(), 3900.0);
//! ```

pub mod cli;
pub mod config;
pub mod embed;
pub mod error;
pub mod fragment;
pub mod npt;
pub mod player;
pub mod sim;
pub mod span;

pub use config::Config;
pub use error::{ControlError, FragmentError};
pub use span::{extract_time_span, TimeSpan};
