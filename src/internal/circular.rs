//! Circular dependency detection infrastructure.

use crate::config::InjectorOptions;
use crate::error::{DiError, DiResult};
use crate::key::Token;

/// Providers currently being resolved, outermost first.
///
/// Owned by the injector rather than thread-local: resolution only happens
/// through `&mut Injector`, so one stack per injector is enough.
#[derive(Debug)]
pub(crate) struct ResolutionStack {
    stack: Vec<Token>,
    detect_cycles: bool,
    max_depth: usize,
}

impl ResolutionStack {
    pub(crate) fn new(options: &InjectorOptions) -> Self {
        Self {
            stack: Vec::new(),
            detect_cycles: options.detect_cycles,
            max_depth: options.max_depth,
        }
    }

    /// Pushes `token`, failing if it is already on the stack or the stack is full.
    pub(crate) fn enter(&mut self, token: Token) -> DiResult<()> {
        // Circular detection BEFORE pushing the new token
        if self.detect_cycles && self.stack.contains(&token) {
            let mut path: Vec<&'static str> =
                self.stack.iter().map(Token::display_name).collect();
            path.push(token.display_name());
            return Err(DiError::Circular(path));
        }

        if self.stack.len() >= self.max_depth {
            return Err(DiError::DepthExceeded(self.stack.len()));
        }

        self.stack.push(token);
        Ok(())
    }

    pub(crate) fn exit(&mut self, token: Token) {
        let last = self.stack.pop();
        debug_assert_eq!(last, Some(token));
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}
