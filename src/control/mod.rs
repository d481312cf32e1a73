//! Control structures.
//!
//! - [`Either`]: The two-case tagged union used as the outcome tag of
//!   partitions and as the root of alternative enum paths.
//!
//! # Examples
//!
//! ```rust
//! use focal::control::Either;
//!
//! let classified: Vec<Either<i32, i32>> = vec![1, 2, 3]
//!     .into_iter()
//!     .map(|n| if n % 2 == 0 { Either::Left(n) } else { Either::Right(n) })
//!     .collect();
//!
//! assert_eq!(classified[1], Either::Left(2));
//! ```

mod either;

pub use either::Either;
