//! Tree-walking interpreter over the bound program.
//!
//! Statements run strictly in order against one global [`Environment`] and
//! an append-only output buffer. Expressions are evaluated recursively;
//! `map` and `reduce` hand their lambda to the chunked engine in
//! [`crate::parallel`], which may fan out to a rayon pool and joins before
//! the enclosing expression continues.

mod exec;
mod expr;
mod lambda;

pub(crate) use lambda::Lambda;

use kmt_types::BoundProgram;
use rustc_hash::FxHashMap;

use crate::cancel::CancellationToken;
use crate::config::EvalConfig;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::Value;

/// What a finished run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationOutput {
    /// Text written by `out` and `print`.
    pub output: String,
    /// Final value of every global.
    pub globals: FxHashMap<String, Value>,
}

/// Shared, read-only state threaded through every evaluation call,
/// including calls made from pool threads.
#[derive(Copy, Clone)]
pub(crate) struct EvalContext<'a> {
    pub(crate) chunk_size: usize,
    pub(crate) cancel: &'a CancellationToken,
}

pub struct Interpreter {
    config: EvalConfig,
    /// Dedicated pool when `config.threads()` is set.
    pool: Option<rayon::ThreadPool>,
    cancel: CancellationToken,
}

impl Interpreter {
    pub fn new(config: EvalConfig) -> Self {
        let pool = config.threads().and_then(|threads| {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("kmt-eval-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    tracing::warn!(%err, threads, "falling back to the global rayon pool");
                    None
                }
            }
        });
        Interpreter {
            config,
            pool,
            cancel: CancellationToken::new(),
        }
    }

    /// Observe `token` instead of the interpreter's own flag.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Run `program` to completion, observing the interpreter's own token.
    ///
    /// Stops at the first runtime error. Returns `Err(Cancelled)` if the
    /// token is cancelled before or during the run.
    pub fn evaluate(&self, program: &BoundProgram) -> EvalResult<EvaluationOutput> {
        self.evaluate_cancellable(program, &self.cancel)
    }

    /// Like [`evaluate`](Self::evaluate), but observing `cancel`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.statements.len(), chunk_size = self.config.chunk_size())
    )]
    pub fn evaluate_cancellable(
        &self,
        program: &BoundProgram,
        cancel: &CancellationToken,
    ) -> EvalResult<EvaluationOutput> {
        match &self.pool {
            Some(pool) => pool.install(|| self.run(program, cancel)),
            None => self.run(program, cancel),
        }
    }

    fn run(&self, program: &BoundProgram, cancel: &CancellationToken) -> EvalResult<EvaluationOutput> {
        let ctx = EvalContext {
            chunk_size: self.config.chunk_size(),
            cancel,
        };
        let mut env = Environment::new();
        let mut output = String::new();
        for stmt in &program.statements {
            cancel.check()?;
            exec::exec_stmt(ctx, stmt, &mut env, &mut output)?;
        }
        tracing::debug!(bytes = output.len(), globals = env.len(), "evaluation finished");
        Ok(EvaluationOutput {
            output,
            globals: env.into_values(),
        })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(EvalConfig::default())
    }
}
