use thiserror::Error;

/// Errors produced while generating a sequence.
///
/// Building a table never fails; only generation does, and only when
/// there is nothing to walk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// The transition table has no keys, so no walk can start.
	#[error("the chain is empty, cannot generate text")]
	EmptyChain,
}
