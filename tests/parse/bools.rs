//! Integration tests for boolean literals

use varconv_parse::parse_bool;

/// One `#[test]` per accepted spelling.
macro_rules! accepts {
    ($($name:ident: $input:literal => $want:literal;)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(parse_bool($input).unwrap(), $want);
            }
        )*
    };
}

/// One `#[test]` per rejected spelling; the fallback is always `false`.
macro_rules! rejects {
    ($($name:ident: $input:literal;)*) => {
        $(
            #[test]
            fn $name() {
                let err = parse_bool($input).unwrap_err();
                assert!(err.is_syntax());
                assert_eq!(err.value::<bool>(), Some(false));
                assert_eq!(err.input, $input);
            }
        )*
    };
}

accepts! {
    digit_zero_is_false: "0" => false;
    lowercase_f_is_false: "f" => false;
    uppercase_f_is_false: "F" => false;
    uppercase_false_is_false: "FALSE" => false;
    lowercase_false_is_false: "false" => false;
    titlecase_false_is_false: "False" => false;
    digit_one_is_true: "1" => true;
    lowercase_t_is_true: "t" => true;
    uppercase_t_is_true: "T" => true;
    uppercase_true_is_true: "TRUE" => true;
    lowercase_true_is_true: "true" => true;
    titlecase_true_is_true: "True" => true;
}

rejects! {
    empty_text_is_rejected: "";
    arbitrary_word_is_rejected: "asdf";
    mixed_case_true_is_rejected: "tRUE";
    mixed_case_false_is_rejected: "fALSE";
    alternating_case_is_rejected: "tRuE";
    yes_is_rejected: "yes";
    off_is_rejected: "off";
    padded_true_is_rejected: " true";
    digit_two_is_rejected: "2";
}
