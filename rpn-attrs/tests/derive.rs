use ariadne::Source;
use rpn_attrs::ErrorKind;
use rpn_error::{Error, ErrorKind};

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown word `{}`", self.word),
    labels = ["this word"],
    help = "only numbers, names and operators are allowed",
)]
struct UnknownWord {
    word: String,
}

#[derive(Debug, ErrorKind)]
#[error(
    message = "leftover operands",
    labels = spans.iter().enumerate().map(|(i, _)| format!("operand #{}", i + 1)),
)]
struct Leftover;

#[derive(Debug, ErrorKind)]
#[error(message = "nothing to see here")]
struct Unlabeled;

/// Renders the error the same way it would be printed to a terminal, without colors.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_label_and_help() {
    let err = Error::new(vec![2..5], UnknownWord { word: "foo".to_string() });
    let out = render(&err, "x foo +");

    assert!(out.contains("unknown word `foo`"), "{}", out);
    assert!(out.contains("this word"), "{}", out);
    assert!(out.contains("only numbers, names and operators are allowed"), "{}", out);
}

#[test]
fn one_label_per_span() {
    let err = Error::new(vec![0..1, 2..3], Leftover);
    let out = render(&err, "x y");

    assert!(out.contains("leftover operands"), "{}", out);
    assert!(out.contains("operand #1"), "{}", out);
    assert!(out.contains("operand #2"), "{}", out);
}

#[test]
fn no_labels() {
    let err = Error::new(vec![0..1], Unlabeled);
    let out = render(&err, "x");

    assert!(out.contains("nothing to see here"), "{}", out);
}

#[test]
fn downcast() {
    let err = Error::new(vec![0..1], Unlabeled);

    assert!(err.is::<Unlabeled>());
    assert!(!err.is::<Leftover>());
    assert!(err.downcast_ref::<UnknownWord>().is_none());
}
