use crate::calculator::{
    arithmetic,
    key::Key,
    operator::Operator,
    state::{Event, OperatorAction, State},
    value::Value,
};

/// Evaluates `operand1 operator operand2`.
///
/// A missing or erroneous operand yields an error. Without an operator the
/// second operand is passed through unchanged.
///
/// # Example
/// ```
/// use pocketcalc::calculator::{
///     engine::evaluate_operands, operator::Operator, value::Value,
/// };
///
/// let sum = evaluate_operands(Some(Value::Integer(3)), Some(Operator::Add), Some(Value::Integer(2)));
/// assert_eq!(sum, Value::Integer(5));
///
/// let passed = evaluate_operands(Some(Value::Integer(0)), None, Some(Value::Integer(4)));
/// assert_eq!(passed, Value::Integer(4));
///
/// let missing = evaluate_operands(Some(Value::Integer(4)), None, None);
/// assert_eq!(missing, Value::Error);
/// ```
#[must_use]
pub fn evaluate_operands(operand1: Option<Value>,
                         operator: Option<Operator>,
                         operand2: Option<Value>)
                         -> Value {
    match (operand1, operand2) {
        (Some(left), Some(right)) if !left.is_error() && !right.is_error() => match operator {
            Some(operator) => arithmetic::apply(operator, left, right),
            None => right,
        },
        _ => Value::Error,
    }
}

/// A four-function calculator driven one key at a time.
///
/// The calculator holds an accumulator (`operand1`), an optional pending
/// operator and second operand, and the text currently being typed. It
/// evaluates strictly left to right. Entering `*` or `/` while a `+` or `-`
/// calculation with both operands is pending cannot be honoured and turns the
/// accumulator into an error.
///
/// ## Usage
///
/// A front end forwards every pressed key to [`Calculator::enter`] and shows
/// [`Calculator::current_display`] afterwards.
///
/// # Example
/// ```
/// use pocketcalc::calculator::engine::Calculator;
///
/// let mut calculator = Calculator::new();
/// for key in ["3", "+", "2", "=", "*", "6", "="] {
///     calculator.enter(key);
/// }
/// assert_eq!(calculator.current_display(), "30");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Text typed since the last operand was stored. Non-empty while editing.
    buffer:   String,
    operand1: Option<Value>,
    operand2: Option<Value>,
    operator: Option<Operator>,
    state:    State,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a cleared calculator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        let mut calculator = Self { buffer:   String::new(),
                                    operand1: None,
                                    operand2: None,
                                    operator: None,
                                    state:    State::Idle, };
        calculator.clear();
        calculator
    }

    /// Resets the calculator: the accumulator becomes `0`, everything else
    /// is dropped.
    pub fn clear(&mut self) {
        self.operand1 = None;
        self.operand2 = None;
        self.operator = None;
        self.store_operand(Value::Integer(0));
        self.buffer.clear();
        self.state = self.state.next(Event::Cleared);
    }

    /// Returns `true` if `token` is one of the operator keys.
    #[must_use]
    pub fn is_operator(token: &str) -> bool {
        Operator::from_token(token).is_some()
    }

    /// Enters a single key.
    ///
    /// `=` evaluates, `Clear` resets, `+ - * /` enter an operator and any
    /// other text is appended to the edit buffer.
    pub fn enter(&mut self, token: &str) {
        log::trace!("before {token:?}: [{self}] buffer {:?} ({:?})", self.buffer, self.state);

        match Key::classify(token) {
            Key::Equals => {
                self.apply_input();
                self.evaluate();
            },
            Key::Clear => self.clear(),
            Key::Operator(operator) => {
                self.apply_input();
                self.enter_operator(operator);
            },
            Key::Text(text) => {
                self.buffer.push_str(text);
                self.state = self.state.next(Event::Typed);
            },
        }

        log::trace!("after {token:?}: [{self}] buffer {:?} ({:?})", self.buffer, self.state);
    }

    /// Evaluates the pending calculation.
    ///
    /// The result becomes the accumulator; the operator and second operand
    /// are dropped. Evaluating without a second operand yields an error.
    pub fn evaluate(&mut self) -> Value {
        let result = evaluate_operands(self.operand1, self.operator, self.operand2);
        self.operand1 = Some(result);
        self.operator = None;
        self.operand2 = None;
        self.state = self.state.next(Event::Evaluated);
        result
    }

    /// Returns what the display shows: the text being typed, else the second
    /// operand, else the accumulator.
    #[must_use]
    pub fn current_display(&self) -> String {
        if !self.buffer.is_empty() {
            return self.buffer.clone();
        }
        self.current_value().map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the second operand if set, else the accumulator.
    #[must_use]
    pub const fn current_value(&self) -> Option<&Value> {
        match (&self.operand2, &self.operand1) {
            (Some(value), _) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }

    /// The accumulator.
    #[must_use]
    pub const fn operand1(&self) -> Option<Value> {
        self.operand1
    }

    /// The pending right-hand operand.
    #[must_use]
    pub const fn operand2(&self) -> Option<Value> {
        self.operand2
    }

    /// The pending operator.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The text typed since the last operand was stored.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The current phase of the calculator.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    // The first operand stored after a clear fills the accumulator, every
    // later one replaces the second operand.
    fn store_operand(&mut self, value: Value) {
        if self.operand1.is_none() {
            self.operand1 = Some(value);
        } else {
            self.operand2 = Some(value);
        }
    }

    fn apply_input(&mut self) {
        if !self.buffer.is_empty() {
            let input = std::mem::take(&mut self.buffer);
            self.store_operand(Value::parse(&input));
        }
    }

    fn enter_operator(&mut self, operator: Operator) {
        let both_operands = self.operand1.is_some() && self.operand2.is_some();
        let action = OperatorAction::decide(both_operands, self.operator, operator);

        match action {
            OperatorAction::Store => self.operator = Some(operator),
            OperatorAction::Evaluate => {
                self.evaluate();
                self.operator = Some(operator);
            },
            OperatorAction::PrecedenceConflict => {
                log::debug!("cannot enter {operator} over pending [{self}], giving up");
                self.operand1 = Some(Value::Error);
            },
        }

        self.state = self.state.next(action.into());
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn slot<T: std::fmt::Display>(value: Option<&T>) -> String {
            value.map_or_else(|| "_".to_string(), ToString::to_string)
        }

        write!(f,
               "{} {} {}",
               slot(self.operand1.as_ref()),
               slot(self.operator.as_ref()),
               slot(self.operand2.as_ref()))
    }
}
