//! Injection-safe literal rendering of parameterized PostgreSQL statements.
//!
//! Compiles a SQL template using 1-based `$N` placeholders into an immutable
//! [`Query`], then renders it against positional [`PgValue`] arguments,
//! quoting and escaping every value in place. This is for execution paths
//! that cannot rely on the driver's native bind-parameter protocol:
//! simple-protocol query execution, logging the exact statement sent, or
//! transports that only accept fully rendered text.
//!
//! The lexer tracks string-literal, identifier, and comment state, so
//! placeholder-looking text inside `'...'`, `E'...'`, `"..."`, `-- ...`, or
//! nested `/* ... */` is left untouched.
//!
//! Rendering is only safe against servers running with
//! `standard_conforming_strings = on` (the default since PostgreSQL 9.1),
//! where backslashes have no special meaning outside `E'...'` literals.
//!
//! ```
//! use pg_sanitize::{PgValue, compile};
//!
//! let query = compile("SELECT * FROM users WHERE id = $1 AND name = $2");
//! let sql = query.render(&[PgValue::from(5i64), PgValue::from("O'Brien")])?;
//! assert_eq!(sql, "SELECT * FROM users WHERE id = 5 AND name = 'O''Brien'");
//! # Ok::<(), pg_sanitize::SanitizeError>(())
//! ```

pub mod error;
mod lexer;
pub mod query;
pub mod tracing;
pub mod value;

pub use error::{Result, SanitizeError};
pub use query::{Part, Query, compile, sanitize_sql};
pub use value::{PgValue, quote_bytes, quote_string};
