//! Extension traits for wrapping errors where they occur.
//!
//! - [`ResultExt`]: wrap the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//!
//! let result: Result<u8, std::num::ParseIntError> = "300".parse::<u8>();
//! let err = result.with_code(400).unwrap_err();
//!
//! assert_eq!(err.get_code(), 400);
//! assert_eq!(err.message(), "number too large to fit in target type");
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
