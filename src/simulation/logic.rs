// the fixed gate set and its semantics
// every function in here is total; the only fallible operation is name lookup

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Gate {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Not,
}

impl Gate {
    // display order for the live visualizer
    pub(crate) const ALL: [Gate; 6] = [Gate::And, Gate::Or, Gate::Nand, Gate::Nor, Gate::Xor, Gate::Not];
    // truth table column order (NOT is unary, so it does not get a column)
    pub(crate) const TWO_INPUT: [Gate; 5] = [Gate::And, Gate::Or, Gate::Nand, Gate::Nor, Gate::Xor];

    pub(crate) fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
            Gate::Xor => a != b,
            Gate::Not => !a, // b is accepted but ignored
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Not => "NOT",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Gate> {
        match name {
            "AND" => Some(Gate::And),
            "OR" => Some(Gate::Or),
            "NAND" => Some(Gate::Nand),
            "NOR" => Some(Gate::Nor),
            "XOR" => Some(Gate::Xor),
            "NOT" => Some(Gate::Not),
            _ => None,
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            Gate::And => "Outputs 1 only when both inputs are 1.",
            Gate::Or => "Outputs 1 when either input is 1.",
            Gate::Nand => "Inverted AND: outputs 0 only when both inputs are 1.",
            Gate::Nor => "Inverted OR: outputs 1 only when both inputs are 0.",
            Gate::Xor => "Exclusive OR: outputs 1 when inputs differ.",
            Gate::Not => "Inverts the input signal.",
        }
    }
}

// the four truth table rows, in the fixed order the table is rendered in
pub(crate) fn input_combinations() -> [(bool, bool); 4] {
    [(false, false), (false, true), (true, false), (true, true)]
}

pub(crate) fn bit_digit(value: bool) -> u8 {
    value as u8
}

#[cfg(test)]
mod test {
    use super::{input_combinations, Gate};

    #[test]
    fn nand_and_nor_complement_and_and_or() {
        for (a, b) in input_combinations() {
            assert_eq!(Gate::Nand.evaluate(a, b), !Gate::And.evaluate(a, b));
            assert_eq!(Gate::Nor.evaluate(a, b), !Gate::Or.evaluate(a, b));
        }
    }

    #[test]
    fn xor_is_inequality() {
        for (a, b) in input_combinations() {
            assert_eq!(Gate::Xor.evaluate(a, b), a != b);
        }
    }

    #[test]
    fn not_is_an_involution() {
        for a in [false, true] {
            assert_eq!(Gate::Not.evaluate(Gate::Not.evaluate(a, false), false), a);
        }
    }

    #[test]
    fn not_ignores_b() {
        for b in [false, true] {
            assert_eq!(Gate::Not.evaluate(false, b), true);
            assert_eq!(Gate::Not.evaluate(true, b), false);
        }
    }

    #[test]
    fn truth_table_rows() {
        let rows: Vec<_> = input_combinations()
            .into_iter()
            .map(|(a, b)| (a, b, Gate::TWO_INPUT.map(|gate| gate.evaluate(a, b))))
            .collect();
        assert_eq!(
            rows,
            vec![
                (false, false, [false, false, true, true, false]),
                (false, true, [false, true, true, false, true]),
                (true, false, [false, true, true, false, true]),
                (true, true, [true, true, false, false, false]),
            ]
        );
    }

    #[test]
    fn names_round_trip() {
        for gate in Gate::ALL {
            assert_eq!(Gate::from_name(gate.name()), Some(gate));
        }
        assert_eq!(Gate::from_name("FOO"), None);
        assert_eq!(Gate::from_name("and"), None); // lookup is over canonical upper-case names only
    }
}
