use crate::syntax::{Expression, Invocation};

pub const MACRO_NAME: &str = "stringified";

/// Pairs the argument with its own source text: `(E, "E")`.
///
/// # Panics
///
/// Panics unless the invocation carries exactly one argument. Hosts check
/// arity against the macro signature before calling in, so any other count
/// is a broken host, not a user error.
pub fn expand(invocation: &Invocation) -> Expression {
    let [argument] = invocation.arguments.as_slice() else {
        panic!(
            "{}! expects exactly one argument, the host passed {}",
            invocation.name,
            invocation.arguments.len()
        );
    };

    Expression::Tuple {
        elements: vec![
            Expression::Embedded(argument.clone()),
            Expression::StringLiteral {
                value: argument.source.clone(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ExprNode;

    fn invoke(args: &[&str]) -> Expression {
        let arguments = args.iter().map(|s| ExprNode::new(*s)).collect();
        expand(&Invocation::new(MACRO_NAME, arguments))
    }

    #[test]
    fn test_pairs_expression_with_its_text() {
        assert_eq!(
            invoke(&["a + b"]),
            Expression::Tuple {
                elements: vec![
                    Expression::Embedded(ExprNode::new("a + b")),
                    Expression::StringLiteral {
                        value: "a + b".into()
                    },
                ]
            }
        );
    }

    #[test]
    fn test_keeps_escapes_and_placeholders_literal() {
        let Expression::Tuple { elements } = invoke(&[r#""hi {name}\n""#]) else {
            panic!("expected a tuple");
        };
        assert_eq!(
            elements[1],
            Expression::StringLiteral {
                value: r#""hi {name}\n""#.into()
            }
        );
    }

    #[test]
    #[should_panic(expected = "exactly one argument")]
    fn test_zero_arguments_aborts() {
        invoke(&[]);
    }
}
