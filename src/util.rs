use crate::tokens::{column_width, TokOpt};

/// Trim utility function to trim down a line of tokens to offset text.
///
/// `start` is measured in display columns. Half of a wide character that gets cut
/// is left behind as a space, so the remaining columns still line up.
/// Tabs are not expanded here and count as a single column; use [trim_fit] when
/// tabs should take their display width.
pub fn trim(input: &[TokOpt], start: usize) -> Vec<TokOpt> {
    let mut opt: Vec<TokOpt> = input.to_vec();
    let mut skipped = 0;
    while skipped < start {
        let Some(token) = opt.first_mut() else {
            break;
        };
        if let Some(ch) = token.nibble() {
            if column_width(ch) > 0 {
                skipped += 1;
            }
        }
        if token.is_empty() {
            opt.remove(0);
        }
    }
    opt.retain(|tok| !tok.is_empty());
    opt
}

/// Fit a line of tokens into a window `width` columns wide, starting at column `start`.
///
/// Tabs are expanded to `tab_width` spaces first, so columns match what is displayed.
pub fn trim_fit(input: &[TokOpt], start: usize, width: usize, tab_width: usize) -> Vec<TokOpt> {
    let mut expanded: Vec<TokOpt> = input.to_vec();
    for tok in &mut expanded {
        tok.expand_tabs(tab_width);
    }
    let mut result = vec![];
    let mut used = 0;
    for tok in trim(&expanded, start) {
        if used >= width {
            break;
        }
        let tok = tok.truncate(width - used);
        used += tok.width();
        if !tok.is_empty() {
            result.push(tok);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    fn line() -> Vec<TokOpt> {
        vec![
            TokOpt::Some("let".to_string(), Kind::Keyword),
            TokOpt::None(" 你x".to_string()),
        ]
    }

    #[test]
    fn trim_columns() {
        assert_eq!(trim(&line(), 0), line());
        assert_eq!(
            trim(&line(), 2),
            vec![
                TokOpt::Some("t".to_string(), Kind::Keyword),
                TokOpt::None(" 你x".to_string()),
            ]
        );
        assert_eq!(trim(&line(), 4), vec![TokOpt::None("你x".to_string())]);
        assert_eq!(trim(&line(), 5), vec![TokOpt::None(" x".to_string())]);
        assert!(trim(&line(), 7).is_empty());
        assert!(trim(&line(), 100).is_empty());
    }

    #[test]
    fn trim_counts_unexpanded_tabs() {
        let line = vec![TokOpt::None("\tif".to_string())];
        assert_eq!(trim(&line, 1), vec![TokOpt::None("if".to_string())]);
        assert_eq!(trim(&line, 2), vec![TokOpt::None("f".to_string())]);
    }

    #[test]
    fn fit_into_window() {
        assert_eq!(
            trim_fit(&line(), 0, 5, 4),
            vec![
                TokOpt::Some("let".to_string(), Kind::Keyword),
                TokOpt::None("  ".to_string()),
            ]
        );
        assert_eq!(
            trim_fit(&line(), 1, 2, 4),
            vec![TokOpt::Some("et".to_string(), Kind::Keyword)]
        );
        assert!(trim_fit(&line(), 0, 0, 4).is_empty());
    }

    #[test]
    fn fit_expands_tabs() {
        let line = vec![TokOpt::None("\tif".to_string())];
        assert_eq!(
            trim_fit(&line, 2, 4, 4),
            vec![TokOpt::None("  if".to_string())]
        );
        assert_eq!(
            trim_fit(&line, 0, 3, 2),
            vec![TokOpt::None("  i".to_string())]
        );
    }
}
