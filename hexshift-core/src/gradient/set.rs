use crate::foundation::error::{HexshiftError, HexshiftResult};
use crate::gradient::stop::Gradient;

/// Most gradients an authoring surface will supply; front ends truncate
/// anything beyond this.
pub const MAX_GRADIENTS: usize = 10;

/// Non-empty, ordered collection of gradients cycled round-robin over frames.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSet {
    gradients: Vec<Gradient>,
}

impl GradientSet {
    /// Build a set from an ordered gradient list.
    ///
    /// Fails with [`HexshiftError::EmptyGradientSet`] when the list is empty.
    pub fn new(gradients: Vec<Gradient>) -> HexshiftResult<Self> {
        if gradients.is_empty() {
            return Err(HexshiftError::EmptyGradientSet);
        }
        Ok(Self { gradients })
    }

    /// Wrap a single gradient.
    pub fn single(gradient: Gradient) -> Self {
        Self {
            gradients: vec![gradient],
        }
    }

    /// The gradients in authored order.
    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    /// Gradient used for frame `frame`: stateless round-robin over the set.
    pub fn select(&self, frame: u32) -> &Gradient {
        &self.gradients[frame as usize % self.gradients.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/set.rs"]
mod tests;
