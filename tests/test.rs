use proptest::prelude::*;
use synlight::{highlight, trim_fit, Highlighter, Kind, Language, LanguageDef, TokOpt};

const DEMO: &str = r#"/*
 A counter
*/
struct CounterView: View {
    @State private var counter = 0

    var body: some View {
        // Tap to count
        Button("Increment") {
            counter += 1.5
        }
    }
}
"#;

fn some(text: &str, kind: Kind) -> TokOpt {
    TokOpt::Some(text.to_string(), kind)
}

fn none(text: &str) -> TokOpt {
    TokOpt::None(text.to_string())
}

#[test]
fn highlighter() {
    let styled = highlight(DEMO, Language::Swift);
    assert_eq!(styled.text(), DEMO);
    assert_eq!(
        styled.lines(),
        vec![
            vec![some("/*", Kind::Comment)],
            vec![some(" A counter", Kind::Comment)],
            vec![some("*/", Kind::Comment)],
            vec![
                some("struct", Kind::Keyword),
                none(" CounterView: "),
                some("View", Kind::Keyword),
                none(" {"),
            ],
            vec![
                none("    @State "),
                some("private", Kind::Keyword),
                none(" "),
                some("var", Kind::Keyword),
                none(" counter = "),
                some("0", Kind::Number),
            ],
            vec![],
            vec![
                none("    "),
                some("var", Kind::Keyword),
                none(" body: "),
                some("some", Kind::Keyword),
                none(" "),
                some("View", Kind::Keyword),
                none(" {"),
            ],
            vec![none("        "), some("// Tap to count", Kind::Comment)],
            vec![
                none("        Button("),
                some("\"Increment\"", Kind::String),
                none(") {"),
            ],
            vec![none("            counter += "), some("1.5", Kind::Number)],
            vec![none("        }")],
            vec![none("    }")],
            vec![none("}")],
            vec![],
        ]
    );
}

#[test]
fn same_snippet_in_each_language() {
    let code = "if x == 10 { return 'a' } # note";
    let swift = highlight(code, Language::Swift);
    let python = highlight(code, Language::Python);
    let js = highlight(code, Language::JavaScript);
    // '#' only starts a comment in python
    assert_eq!(swift.kind_at(code.len() - 1), None);
    assert_eq!(js.kind_at(code.len() - 1), None);
    assert_eq!(python.kind_at(code.len() - 1), Some(Kind::Comment));
    for styled in [&swift, &python, &js] {
        assert_eq!(styled.kind_at(0), Some(Kind::Keyword));
        assert_eq!(styled.kind_at(8), Some(Kind::Number));
        assert_eq!(styled.kind_at(21), Some(Kind::String));
    }
}

#[test]
fn compiled_highlighters_are_shared() {
    let a = Language::Python.highlighter();
    let b = Language::Python.highlighter();
    assert!(std::ptr::eq(a, b));
    let code = "from os import path";
    assert_eq!(a.run(code), highlight(code, Language::Python));
}

#[test]
fn concurrent_highlighting() {
    let handles: Vec<_> = Language::ALL
        .into_iter()
        .map(|lang| std::thread::spawn(move || highlight("return 1 'x'", lang)))
        .collect();
    for handle in handles {
        let styled = handle.join().unwrap();
        assert_eq!(styled.spans().len(), 3);
    }
}

#[test]
fn display_a_scrolled_line() {
    let styled = highlight("let s = \"你好\" // hi", Language::JavaScript);
    let line = &styled.lines()[0];
    assert_eq!(
        trim_fit(line, 4, 8, 4),
        vec![none("s = "), some("\"你 ", Kind::String)]
    );
}

#[test]
fn custom_language() {
    const SQL: LanguageDef = LanguageDef {
        name: "SQL",
        keywords: &["SELECT", "FROM", "WHERE"],
        single_line_comment: r"--.*$",
        multi_line_comment_start: r"/\*",
        multi_line_comment_end: r"\*/",
    };
    let h = Highlighter::new(&SQL).unwrap();
    let styled = h.run("SELECT name FROM users WHERE id = 7 -- one row");
    let kinds: Vec<_> = styled.spans().into_iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![Kind::Keyword, Kind::Keyword, Kind::Keyword, Kind::Number, Kind::Comment]
    );
}

proptest! {
    #[test]
    fn text_survives_highlighting(code in "\\PC*") {
        for lang in Language::ALL {
            let styled = highlight(&code, lang);
            prop_assert_eq!(styled.text(), code.as_str());
            let joined: String = styled.tokens().iter().map(TokOpt::text).collect();
            prop_assert_eq!(&joined, &code);
        }
    }

    #[test]
    fn code_like_text_survives_highlighting(
        code in "[a-z \"'/*#\n0-9.]{0,64}"
    ) {
        for lang in Language::ALL {
            let styled = highlight(&code, lang);
            let lines: Vec<String> = styled
                .lines()
                .iter()
                .map(|l| l.iter().map(TokOpt::text).collect())
                .collect();
            prop_assert_eq!(lines.join("\n"), code.clone());
            prop_assert_eq!(highlight(&code, lang), styled);
        }
    }
}
