use yare::parameterized;

use super::*;

#[test]
fn push_pop_is_lifo() {
    let mut stack = Stack::new();
    for i in 1..=3 {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek().unwrap(), &3);
    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert!(stack.is_empty());
}

#[test]
fn empty_stack_errors() {
    let mut stack: Stack<i32> = Stack::new();
    assert!(matches!(stack.pop(), Err(Error::StackUnderflow)));
    assert!(matches!(stack.peek(), Err(Error::EmptyStack)));
}

#[test]
fn bounded_stack_overflows() {
    let mut stack = Stack::with_capacity_limit(2);
    stack.push('a').unwrap();
    stack.push('b').unwrap();
    let err = stack.push('c').unwrap_err();
    assert!(matches!(err, Error::StackOverflow));
    assert_eq!(err.to_string(), "Stack overflow: Cannot push to full stack");
    stack.pop().unwrap();
    assert!(stack.push('c').is_ok());
}

#[test]
fn views_and_display() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.to_string(), "Stack([])");
    for i in [1, 2, 3] {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.to_vec(), vec![1, 2, 3]);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(stack.to_string(), "Stack([1, 2, 3])");
    stack.clear();
    assert!(stack.is_empty());
}

#[test]
fn min_stack_tracks_minimum_through_pops() {
    let mut stack = MinStack::new();
    assert!(matches!(stack.min(), Err(Error::EmptyStack)));

    stack.push(5);
    stack.push(3);
    stack.push(7);
    stack.push(3);
    stack.push(1);
    assert_eq!(stack.min().unwrap(), &1);
    assert_eq!(stack.pop().unwrap(), 1);
    assert_eq!(stack.min().unwrap(), &3);
    assert_eq!(stack.pop().unwrap(), 3);
    // the earlier 3 is still tracked
    assert_eq!(stack.min().unwrap(), &3);
    assert_eq!(stack.pop().unwrap(), 7);
    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.min().unwrap(), &5);
    assert_eq!(stack.peek().unwrap(), &5);
    assert_eq!(stack.len(), 1);
    stack.pop().unwrap();
    assert!(stack.is_empty());
    assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
}

#[parameterized(
    empty = { "", true },
    simple = { "()", true },
    nested = { "{[()]}", true },
    with_text = { "fn(a[0]) { b }", true },
    unclosed = { "((", false },
    wrong_order = { "([)]", false },
    stray_close = { ")(", false },
)]
fn balanced(expression: &str, expected: bool) {
    assert_eq!(balanced_parentheses(expression), expected);
}

#[parameterized(
    add = { "2 3 +", 5.0 },
    mixed = { "2 3 1 * + 9 -", -4.0 },
    divide = { "15 7 1 1 + - / 3 * 2 1 1 + + -", 5.0 },
    single = { "42", 42.0 },
)]
fn postfix(expression: &str, expected: f64) {
    assert_eq!(evaluate_postfix(expression).unwrap(), expected);
}

#[test]
fn postfix_errors() {
    assert!(matches!(evaluate_postfix("1 +"), Err(Error::InvalidPostfix)));
    assert!(matches!(evaluate_postfix("1 2"), Err(Error::InvalidPostfix)));
    assert!(matches!(evaluate_postfix(""), Err(Error::InvalidPostfix)));
    assert!(matches!(evaluate_postfix("1 0 /"), Err(Error::DivisionByZero)));
    match evaluate_postfix("1 x +") {
        Err(Error::InvalidToken(token)) => assert_eq!(token, "x"),
        other => panic!("unexpected {other:?}"),
    }
}

#[parameterized(
    nan = { "NaN", "NaN" },
    infinity_operand = { "inf 1 +", "inf" },
    spelled_infinity = { "1 -infinity -", "-infinity" },
)]
fn postfix_rejects_non_finite_tokens(expression: &str, token: &str) {
    match evaluate_postfix(expression) {
        Err(Error::InvalidToken(found)) => assert_eq!(found, token),
        other => panic!("unexpected {other:?}"),
    }
}
