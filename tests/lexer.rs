use forklang::interpreter::lexer::{ILLEGAL_LITERAL, Lexer, Token, TokenKind, tokenize};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(source);

    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token,
                   Token::new(*kind, *literal),
                   "token {i} of {source:?} differs");
    }
}

#[test]
fn operators_punctuation_and_words() {
    use TokenKind::{
        Comma, Equal, Greater, Ident, Int, LBrace, LParen, Less, Let, Minus, NotEqual, Plus,
        RBrace, RParen, Semicolon, Slash, Star,
    };

    assert_tokens("\n\n\t +-/* ,;( )123{}let==abcd!=<>\n\t",
                  &[(Plus, "+"),
                    (Minus, "-"),
                    (Slash, "/"),
                    (Star, "*"),
                    (Comma, ","),
                    (Semicolon, ";"),
                    (LParen, "("),
                    (RParen, ")"),
                    (Int, "123"),
                    (LBrace, "{"),
                    (RBrace, "}"),
                    (Let, "let"),
                    (Equal, "=="),
                    (Ident, "abcd"),
                    (NotEqual, "!="),
                    (Less, "<"),
                    (Greater, ">"),
                    (TokenKind::Eof, "")]);
}

#[test]
fn two_character_operators_use_one_character_of_lookahead() {
    assert_tokens("=", &[(TokenKind::Assign, "="), (TokenKind::Eof, "")]);
    assert_tokens("==", &[(TokenKind::Equal, "=="), (TokenKind::Eof, "")]);
    assert_tokens("===", &[(TokenKind::Equal, "=="), (TokenKind::Assign, "=")]);
    assert_tokens("!", &[(TokenKind::Bang, "!"), (TokenKind::Eof, "")]);
    assert_tokens("!!=", &[(TokenKind::Bang, "!"), (TokenKind::NotEqual, "!=")]);
    assert_tokens("= =", &[(TokenKind::Assign, "="), (TokenKind::Assign, "=")]);
}

#[test]
fn keywords_take_priority_over_identifiers() {
    use TokenKind::{Else, False, Function, Ident, If, Let, Return, True};

    assert_tokens("fn let true false if else return letter iff",
                  &[(Function, "fn"),
                    (Let, "let"),
                    (True, "true"),
                    (False, "false"),
                    (If, "if"),
                    (Else, "else"),
                    (Return, "return"),
                    (Ident, "letter"),
                    (Ident, "iff")]);
}

#[test]
fn digit_and_letter_runs_are_maximal() {
    assert_tokens("123abc 0042",
                  &[(TokenKind::Int, "123"),
                    (TokenKind::Ident, "abc"),
                    (TokenKind::Int, "0042"),
                    (TokenKind::Eof, "")]);
}

#[test]
fn huge_integer_literals_are_kept_as_text() {
    assert_tokens("99999999999999999999999",
                  &[(TokenKind::Int, "99999999999999999999999")]);
}

#[test]
fn illegal_input_does_not_stop_scanning() {
    assert_tokens("1 @ 2",
                  &[(TokenKind::Int, "1"),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Int, "2"),
                    (TokenKind::Eof, "")]);
    assert_tokens("a_b",
                  &[(TokenKind::Ident, "a"),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Ident, "b")]);
}

#[test]
fn each_byte_of_a_non_ascii_character_is_illegal() {
    assert_tokens("é",
                  &[(TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Eof, "")]);
    assert_tokens("a€1",
                  &[(TokenKind::Ident, "a"),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Illegal, ILLEGAL_LITERAL),
                    (TokenKind::Int, "1"),
                    (TokenKind::Eof, "")]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("  x  ");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }

    let mut empty = Lexer::new("");
    assert_eq!(empty.next_token(), Token::eof());
    assert_eq!(empty.next_token(), Token::eof());
}

#[test]
fn iterator_stops_before_end_of_input() {
    let literals: Vec<String> = tokenize("let five = 5;").into_iter()
                                                          .map(|t| t.literal)
                                                          .collect();
    assert_eq!(literals, ["let", "five", "=", "5", ";"]);
    assert!(tokenize(" \t\r\n ").is_empty());
}

#[test]
fn kinds_display_with_diagnostic_names() {
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Let.to_string(), "LET");
    assert_eq!(TokenKind::Function.to_string(), "FN");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::NotEqual.to_string(), "!=");
    assert_eq!(Token::new(TokenKind::Int, "7").to_string(), "type: INT, literal: 7");
}
