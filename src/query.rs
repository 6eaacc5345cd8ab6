//! Compiled query representation and rendering.

use compact_str::CompactString;
use smallvec::{SmallVec, smallvec};

use crate::error::{Result, SanitizeError};
use crate::lexer;
use crate::value::PgValue;

/// One segment of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A verbatim SQL fragment.
    Literal(CompactString),
    /// A 1-based reference into the argument list supplied at render time.
    Placeholder(usize),
}

/// A compiled template: the ordered part sequence produced by the lexer.
///
/// Immutable after construction; may be shared read-only across any number
/// of render calls and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    parts: SmallVec<[Part; 4]>,
}

impl Query {
    /// Compiles a `$N` template into its part sequence.
    pub fn new(sql: &str) -> Self {
        let parts = lexer::lex(sql);
        crate::sanitize_trace_compile!(sql.len(), parts.len());
        Query { parts }
    }

    /// Read-only view of the compiled parts, in template order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Renders the final SQL text, substituting every placeholder with the
    /// literal rendering of its argument.
    ///
    /// Fails without producing any output if a placeholder has no matching
    /// argument, an argument's kind has no literal form, or an argument is
    /// never referenced. A placeholder may reference the same argument any
    /// number of times.
    pub fn render(&self, args: &[PgValue<'_>]) -> Result<String> {
        crate::sanitize_trace_render!(self.parts.len(), args.len());
        let mut used: SmallVec<[bool; 8]> = smallvec![false; args.len()];
        let mut buf = String::with_capacity(self.estimate_capacity());

        for part in &self.parts {
            match part {
                Part::Literal(text) => buf.push_str(text),
                Part::Placeholder(index) => {
                    let arg_idx = index
                        .checked_sub(1)
                        .filter(|i| *i < args.len())
                        .ok_or(SanitizeError::InsufficientArguments(*index))?;
                    args[arg_idx].write_literal(&mut buf)?;
                    used[arg_idx] = true;
                }
            }
        }

        if let Some(position) = used.iter().position(|u| !*u) {
            return Err(SanitizeError::UnusedArgument(position));
        }

        Ok(buf)
    }

    /// Output size estimate: literal bytes plus a rendering allowance per
    /// placeholder.
    fn estimate_capacity(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                Part::Literal(text) => text.len(),
                Part::Placeholder(_) => 8,
            })
            .sum()
    }
}

/// Compiles a `$N` template into a [`Query`].
pub fn compile(sql: &str) -> Query {
    Query::new(sql)
}

/// One-shot compile-and-render.
///
/// Compiling is cheap but not free; callers substituting into the same
/// template repeatedly should hold on to the [`Query`] instead.
pub fn sanitize_sql(sql: &str, args: &[PgValue<'_>]) -> Result<String> {
    compile(sql).render(args)
}
