//! Input classifier.

use tracing::warn;

use crate::domains::toolkit::{Toolkit, ToolkitResult};

/// Record that terminates a connection-table block.
pub const MOL_BLOCK_END: &str = "M  END";

/// Textual encoding of a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Multi-line connection table.
    MolBlock,
    /// Single line notation, e.g. SMILES.
    LineNotation,
}

impl InputFormat {
    /// Classify a body. Any occurrence of `M  END` marks a block; the match is
    /// exact and case-sensitive.
    pub fn detect(input: &str) -> Self {
        if input.contains(MOL_BLOCK_END) {
            Self::MolBlock
        } else {
            Self::LineNotation
        }
    }
}

/// Parse a raw body with the parser its format calls for.
///
/// Sanitization failures are reported on the diagnostic stream and become
/// `Ok(None)`; every other toolkit error propagates.
pub fn read_molecule<T: Toolkit>(toolkit: &T, input: &str) -> ToolkitResult<Option<T::Molecule>> {
    let parsed = match InputFormat::detect(input) {
        InputFormat::MolBlock => toolkit.mol_from_block(input),
        InputFormat::LineNotation => toolkit.mol_from_line(input),
    };

    match parsed {
        Err(e) if e.is_sanitization() => {
            warn!(input = %input, "{}", e);
            Ok(None)
        }
        other => other,
    }
}
