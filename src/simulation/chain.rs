use std::fmt;

use crate::simulation::logic::{bit_digit, Gate};

// one point in a chain's execution trace
// the step list always has one more entry than the gate sequence; step 0 is the initial inputs and has no gate
#[derive(Debug)]
pub(crate) struct Step {
    pub(crate) index: usize,
    pub(crate) gate: Option<Gate>,
    pub(crate) label: String,
    pub(crate) a: bool,
    pub(crate) b: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ChainError {
    UnknownGate { name: String, position: usize },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::UnknownGate { name, position } => write!(f, "Unknown gate \"{}\" at position {}.", name, position),
        }
    }
}
impl std::error::Error for ChainError {}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.gate {
            None => write!(f, "Step 0 – {}: A={}, B={}", self.label, bit_digit(self.a), bit_digit(self.b)),
            Some(gate) => write!(f, "Step {} – {}: {} ⇒ A={}, B={}", self.index, gate.name(), self.label, bit_digit(self.a), bit_digit(self.b)),
        }
    }
}

// split on commas, trim, upper-case, drop empty tokens
// tokens are not checked against the gate set here; that happens during simulation so the error can carry a position
pub(crate) fn parse_sequence(spec: &str) -> Vec<String> {
    spec.split(',').map(|raw| raw.trim().to_uppercase()).filter(|token| !token.is_empty()).collect()
}

// a missing initial input spec means "00"; any character that is not a nonzero digit normalizes to 0
fn initial_bits(spec: &str) -> (bool, bool) {
    let spec = spec.trim();
    let spec = if spec.is_empty() { "00" } else { spec };
    let mut digits = spec.chars();
    (bit_from_char(digits.next()), bit_from_char(digits.next()))
}

fn bit_from_char(c: Option<char>) -> bool {
    c.and_then(|c| c.to_digit(10)).map_or(false, |digit| digit != 0)
}

pub(crate) fn simulate_chain(sequence_spec: &str, input_spec: &str) -> Result<Vec<Step>, ChainError> {
    let sequence = parse_sequence(sequence_spec);
    let (mut a, mut b) = initial_bits(input_spec);

    let mut steps = vec![Step { index: 0, gate: None, label: "Initial Inputs".to_string(), a, b }];

    for (index, name) in sequence.iter().enumerate() {
        let gate = match Gate::from_name(name) {
            Some(gate) => gate,
            None => return Err(ChainError::UnknownGate { name: name.clone(), position: index + 1 }),
        };

        let label = match gate {
            Gate::Not => format!("NOT({})", bit_digit(a)),
            _ => format!("{}({}, {})", gate.name(), bit_digit(a), bit_digit(b)),
        };

        match gate {
            // NOT overwrites A and carries B through unchanged
            Gate::Not => a = gate.evaluate(a, b),
            // a two-input gate has one output, which feeds forward into both halves of the pair
            // so that the next gate in the chain applies itself to two copies of this result
            _ => {
                let out = gate.evaluate(a, b);
                a = out;
                b = out;
            }
        }

        steps.push(Step { index: index + 1, gate: Some(gate), label, a, b });
    }

    Ok(steps)
}

pub(crate) fn format_trace(steps: &[Step]) -> String {
    steps.iter().map(Step::to_string).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod test {
    use super::{format_trace, parse_sequence, simulate_chain, ChainError};
    use crate::simulation::logic::Gate;

    #[test]
    fn parse_trims_uppercases_and_drops_empty_tokens() {
        assert_eq!(parse_sequence("and, or ,,xor"), vec!["AND", "OR", "XOR"]);
        assert_eq!(parse_sequence(""), Vec::<String>::new());
        assert_eq!(parse_sequence(" , ,"), Vec::<String>::new());
        assert_eq!(parse_sequence("not,"), vec!["NOT"]);
    }

    #[test]
    fn and_then_not() {
        let steps = simulate_chain("AND, NOT", "10").unwrap();
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].gate, None);
        assert_eq!(steps[0].label, "Initial Inputs");
        assert_eq!((steps[0].a, steps[0].b), (true, false));

        // AND(1, 0) = 0 collapses both halves of the pair
        assert_eq!(steps[1].gate, Some(Gate::And));
        assert_eq!(steps[1].label, "AND(1, 0)");
        assert_eq!((steps[1].a, steps[1].b), (false, false));

        // NOT(0) = 1 overwrites A while B is carried through
        assert_eq!(steps[2].gate, Some(Gate::Not));
        assert_eq!(steps[2].label, "NOT(0)");
        assert_eq!((steps[2].a, steps[2].b), (true, false));
    }

    #[test]
    fn not_carries_b_through_unchanged() {
        let steps = simulate_chain("NOT", "01").unwrap();
        assert_eq!((steps[1].a, steps[1].b), (true, true));
        assert_eq!(steps[1].label, "NOT(0)");
    }

    #[test]
    fn unknown_gate_aborts_with_name_and_position() {
        assert_eq!(simulate_chain("FOO", "11").unwrap_err(), ChainError::UnknownGate { name: "FOO".to_string(), position: 1 });
        assert_eq!(simulate_chain("and, nandy, or", "11").unwrap_err(), ChainError::UnknownGate { name: "NANDY".to_string(), position: 2 });
        assert_eq!(ChainError::UnknownGate { name: "FOO".to_string(), position: 1 }.to_string(), "Unknown gate \"FOO\" at position 1.");
    }

    #[test]
    fn empty_sequence_yields_only_the_initial_step() {
        let steps = simulate_chain("", "").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].gate, None);
        assert_eq!((steps[0].a, steps[0].b), (false, false));
    }

    #[test]
    fn step_count_is_gate_count_plus_one() {
        let steps = simulate_chain("and, or, xor, nand, nor, not", "11").unwrap();
        assert_eq!(steps.len(), 7);
    }

    #[test]
    fn malformed_input_characters_normalize_to_zero() {
        let steps = simulate_chain("", "x7").unwrap();
        assert_eq!((steps[0].a, steps[0].b), (false, true)); // 'x' -> 0, nonzero digit -> 1
        let steps = simulate_chain("", "1").unwrap();
        assert_eq!((steps[0].a, steps[0].b), (true, false)); // missing second character -> 0
    }

    #[test]
    fn trace_formatting() {
        let steps = simulate_chain("AND, NOT", "10").unwrap();
        assert_eq!(format_trace(&steps), "Step 0 – Initial Inputs: A=1, B=0\nStep 1 – AND: AND(1, 0) ⇒ A=0, B=0\nStep 2 – NOT: NOT(0) ⇒ A=1, B=0");
    }
}
