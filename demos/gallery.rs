use lliw::Fg;
use synlight::{highlight, Kind, Language, Theme, TokOpt};

pub static SNIPPETS: [(&str, Language); 3] = [
    (
        "\
/*
  A view that owns its own state
*/
struct CounterView: View {
    @State private var counter = 0

    var body: some View {
        // Every tap re-renders the view
        Button(\"Increment\") {
            counter += 1
        }
    }
}",
        Language::Swift,
    ),
    (
        "\
def greet(name):
    \"\"\"Say hello
    to someone\"\"\"
    # Defaults to the world
    if name is None:
        return 'Hello, world'
    return f\"Hello, {name}\"",
        Language::Python,
    ),
    (
        "\
function area(r) {
    // Circle area
    const pi = 3.14159;
    return pi * r * r; /* squared */
}",
        Language::JavaScript,
    ),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let theme = Theme::default();
    for (code, language) in &SNIPPETS {
        println!("--- {language} ---");
        let styled = highlight(code, *language);
        for (y, line) in styled.lines().iter().enumerate() {
            print!("{: <3} |", y + 1);
            for token in line {
                match token {
                    TokOpt::Some(text, kind) => print!("{}{text}{}", colour(&theme, *kind), Fg::Reset),
                    TokOpt::None(text) => print!("{text}"),
                }
            }
            println!();
        }
        println!();
    }
}

fn colour(theme: &Theme, kind: Kind) -> Fg {
    // The default theme always resolves
    let (r, g, b) = theme.colour(kind).rgb().unwrap_or((255, 255, 255));
    Fg::Rgb(r, g, b)
}
