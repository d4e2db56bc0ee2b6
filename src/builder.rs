use crate::engine::{LcsEngine, OperandMode};
use crate::traits::NodeEquality;

pub struct LcsEngineBuilder<C> {
    comparator: C,
    mode: Option<OperandMode>,
}

impl Default for LcsEngineBuilder<NodeEquality> {
    fn default() -> Self {
        Self::new(NodeEquality)
    }
}

impl<C> LcsEngineBuilder<C> {
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            mode: None,
        }
    }
    pub fn operand_mode(mut self, mode: OperandMode) -> Self {
        self.mode = Some(mode);
        self
    }
    /// Shorthand for `operand_mode(OperandMode::MirrorFirst)` when `mirror` is set.
    pub fn mirror_first_operand(self, mirror: bool) -> Self {
        if mirror {
            self.operand_mode(OperandMode::MirrorFirst)
        } else {
            self.operand_mode(OperandMode::Distinct)
        }
    }
    pub fn comparator<D>(self, comparator: D) -> LcsEngineBuilder<D> {
        LcsEngineBuilder {
            comparator,
            mode: self.mode,
        }
    }
    pub fn build(self) -> LcsEngine<C> {
        match self.mode {
            Some(mode) => LcsEngine::with_mode(self.comparator, mode),
            None => LcsEngine::new(self.comparator),
        }
    }
}
