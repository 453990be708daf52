mod support;

use claims::assert_ok;
use exprcc::{
    errors::CompilerError,
    parser::{lexer::tokenize, Parser},
};
use indoc::indoc;

use crate::support::{compile, compile_err};

#[test]
fn test_compiles_a_full_program_with_precedence() {
    let listing = compile("2+3*4");

    assert_eq!(
        listing,
        indoc! {"
            .intel_syntax noprefix
            .global main
            main:
              push 2
              push 3
              push 4
              pop rdi
              pop rax
              imul rax, rdi
              push rax
              pop rdi
              pop rax
              add rax, rdi
              push rax
              pop rax
              ret
        "}
    );
}

#[test]
fn test_compiles_grouping_and_division() {
    let listing = compile("(2+3)/4");

    assert_eq!(
        listing,
        indoc! {"
            .intel_syntax noprefix
            .global main
            main:
              push 2
              push 3
              pop rdi
              pop rax
              add rax, rdi
              push rax
              push 4
              pop rdi
              pop rax
              cqo
              idiv rdi
              push rax
              pop rax
              ret
        "}
    );
}

#[test]
fn test_whitespace_produces_identical_programs() {
    assert_eq!(compile(" 1 + 2 "), compile("1+2"));
    assert_eq!(compile("\t7\t/\t2\t"), compile("7/2"));
}

#[test]
fn test_lex_error_diagnostic_is_exact() {
    let input = "1 $ 2";
    let e = compile_err(input);

    assert!(matches!(e, CompilerError::Lex(_)));
    assert_eq!(e.diagnostic_string(input), "1 $ 2\n  ^ expected a number\n");
}

#[test]
fn test_parse_error_diagnostic_points_after_the_operator() {
    let input = "1+";
    let e = compile_err(input);

    assert!(matches!(e, CompilerError::Parse(_)));
    assert_eq!(e.diagnostic_string(input), "1+\n  ^ expected a number\n");
}

#[test]
fn test_unclosed_paren_diagnostic() {
    let input = "(1+2";
    let e = compile_err(input);

    assert_eq!(e.diagnostic_string(input), "(1+2\n    ^ expected ')'\n");
}

#[test]
fn test_trailing_garbage_is_rejected() {
    let input = "1+2)";
    let e = compile_err(input);

    assert_eq!(
        e.diagnostic_string(input),
        "1+2)\n   ^ expected end of input\n"
    );
}

#[test]
fn test_canonical_ast_form_round_trips() {
    let inputs = ["42", "2+3*4", "8-3-2", "(2+3)*4", "(1+2)*(3-4)/5"];

    for input in inputs {
        let tree = assert_ok!(Parser::new(assert_ok!(tokenize(input))).parse());
        let reparsed = assert_ok!(Parser::new(assert_ok!(tokenize(&tree.to_string()))).parse());

        assert_eq!(tree, reparsed, "round-trip failed for `{}`", input);
    }
}
