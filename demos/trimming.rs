use lliw::Fg;
use synlight::{highlight, trim_fit, Kind, Language, TokOpt};

pub static CODE: &str = "let greeting = \"你好\"; // scroll me sideways";

fn main() {
    let styled = highlight(CODE, Language::JavaScript);
    let line = &styled.lines()[0];
    // Scroll a 16 column window across the line
    for start in 0..30 {
        for token in trim_fit(line, start, 16, 4) {
            match token {
                TokOpt::Some(text, kind) => print!("{}{text}{}", colour(kind), Fg::Reset),
                TokOpt::None(text) => print!("{text}"),
            }
        }
        println!("|");
    }
}

fn colour(kind: Kind) -> Fg {
    match kind {
        Kind::Keyword => Fg::Purple,
        Kind::String => Fg::Red,
        Kind::Number => Fg::Blue,
        Kind::Comment => Fg::Green,
    }
}
