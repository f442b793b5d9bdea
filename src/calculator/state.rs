use crate::calculator::operator::Operator;

/// The phase the calculator is in.
///
/// The phase summarizes which of the edit buffer, operands and operator are
/// currently filled in. It changes only through [`State::next`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing has been entered since the last clear.
    #[default]
    Idle,
    /// The first operand is being typed.
    EnteringOperand1,
    /// A result or first operand is held, no operator is pending.
    HaveOperand1,
    /// An operator is pending, the second operand has not been typed yet.
    HaveOperator,
    /// The second operand is being typed.
    EnteringOperand2,
    /// Both operands are held with an operator pending. Only reached when a
    /// precedence conflict left the calculation unevaluated.
    HaveBothOperands,
}

/// Something that happened to the calculator, driving the state transitions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text was appended to the edit buffer.
    Typed,
    /// The calculator was reset.
    Cleared,
    /// The pending calculation was evaluated into the accumulator.
    Evaluated,
    /// An operator was stored, possibly after evaluating.
    OperatorStored,
    /// A higher priority operator was entered over a pending lower priority
    /// one; the accumulator became an error.
    PrecedenceConflict,
}

impl State {
    /// The transition table.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::state::{Event, State};
    ///
    /// assert_eq!(State::Idle.next(Event::Typed), State::EnteringOperand1);
    /// assert_eq!(State::HaveOperator.next(Event::Typed), State::EnteringOperand2);
    /// assert_eq!(State::EnteringOperand2.next(Event::Evaluated), State::HaveOperand1);
    /// assert_eq!(State::HaveBothOperands.next(Event::Cleared), State::Idle);
    /// ```
    #[must_use]
    pub const fn next(self, event: Event) -> Self {
        match (self, event) {
            (_, Event::Cleared) => Self::Idle,
            (Self::Idle | Self::EnteringOperand1 | Self::HaveOperand1, Event::Typed) => {
                Self::EnteringOperand1
            },
            (Self::HaveOperator | Self::EnteringOperand2 | Self::HaveBothOperands, Event::Typed) => {
                Self::EnteringOperand2
            },
            (_, Event::Evaluated) => Self::HaveOperand1,
            (_, Event::OperatorStored) => Self::HaveOperator,
            (_, Event::PrecedenceConflict) => Self::HaveBothOperands,
        }
    }
}

/// What entering an operator does to the pending calculation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorAction {
    /// Only store the operator, replacing any pending one.
    Store,
    /// Evaluate the pending calculation, then store the operator.
    Evaluate,
    /// Refuse to evaluate left to right and turn the accumulator into an
    /// error. The pending operator and second operand are left in place.
    PrecedenceConflict,
}

impl OperatorAction {
    /// Guards the operator transition.
    ///
    /// Without both operands there is nothing to evaluate. With both, a
    /// multiplicative operator entered over a pending additive one is a
    /// conflict, anything else evaluates.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::{operator::Operator, state::OperatorAction};
    ///
    /// let action = OperatorAction::decide(false, Some(Operator::Add), Operator::Multiply);
    /// assert_eq!(action, OperatorAction::Store);
    ///
    /// let action = OperatorAction::decide(true, Some(Operator::Add), Operator::Subtract);
    /// assert_eq!(action, OperatorAction::Evaluate);
    ///
    /// let action = OperatorAction::decide(true, Some(Operator::Add), Operator::Multiply);
    /// assert_eq!(action, OperatorAction::PrecedenceConflict);
    /// ```
    #[must_use]
    pub const fn decide(both_operands: bool, stored: Option<Operator>, entered: Operator) -> Self {
        if !both_operands {
            Self::Store
        } else if entered.outranks(stored) {
            Self::PrecedenceConflict
        } else {
            Self::Evaluate
        }
    }
}

impl From<OperatorAction> for Event {
    fn from(action: OperatorAction) -> Self {
        match action {
            OperatorAction::Store | OperatorAction::Evaluate => Self::OperatorStored,
            OperatorAction::PrecedenceConflict => Self::PrecedenceConflict,
        }
    }
}
