/// One structural unit of a generated note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    List(Vec<String>),
    Paragraph(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedNote {
    pub blocks: Vec<Block>,
}

/// Splits a note body into headings, bullet lists and paragraphs.
///
/// Lines are classified in a single pass, first match wins:
/// - `**...` is a heading with every `*` removed.
/// - `*...` joins the open list (or opens one), minus its first `"* "`.
/// - a blank line closes the open list and emits nothing.
/// - anything else is a paragraph kept verbatim.
///
/// A heading or paragraph also closes the open list, so list items on either
/// side of one land in separate `Block::List`s.
pub fn format_note(note: &str) -> FormattedNote {
    let mut blocks = Vec::new();
    let mut list_open = false;

    for line in note.split('\n') {
        if line.starts_with("**") {
            list_open = false;
            blocks.push(Block::Heading(line.replace('*', "")));
        } else if line.starts_with('*') {
            let item = line.replacen("* ", "", 1);
            match blocks.last_mut() {
                Some(Block::List(items)) if list_open => items.push(item),
                _ => {
                    blocks.push(Block::List(vec![item]));
                    list_open = true;
                }
            }
        } else if line.trim().is_empty() {
            list_open = false;
        } else {
            list_open = false;
            blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    FormattedNote { blocks }
}

/// Renders blocks as `<h3>`, `<ul><li>` and `<p>` markup. Text is inserted
/// as-is.
pub fn render_html(note: &FormattedNote) -> String {
    let mut html = String::new();
    for block in &note.blocks {
        match block {
            Block::Heading(text) => {
                html.push_str("<h3>");
                html.push_str(text);
                html.push_str("</h3>");
            }
            Block::List(items) => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str("<li>");
                    html.push_str(item);
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
            }
            Block::Paragraph(text) => {
                html.push_str("<p>");
                html.push_str(text);
                html.push_str("</p>");
            }
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(text: &str) -> Block {
        Block::Heading(text.to_string())
    }

    fn list(items: &[&str]) -> Block {
        Block::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(text.to_string())
    }

    #[rstest]
    #[case::empty("", vec![])]
    #[case::only_blank_lines("\n  \n\t\n", vec![])]
    #[case::title("**Title**", vec![heading("Title")])]
    #[case::single_list("* a\n* b", vec![list(&["a", "b"])])]
    #[case::blank_splits_list("* a\n\n* b", vec![list(&["a"]), list(&["b"])])]
    #[case::mixed(
        "**H**\n* a\nplain text",
        vec![heading("H"), list(&["a"]), paragraph("plain text")]
    )]
    #[case::plain_lines("one\ntwo", vec![paragraph("one"), paragraph("two")])]
    fn formats_blocks(#[case] input: &str, #[case] expected: Vec<Block>) {
        assert_eq!(format_note(input).blocks, expected);
    }

    #[test]
    fn double_marker_is_heading_not_list_item() {
        assert_eq!(
            format_note("* a\n**not-a-list").blocks,
            vec![list(&["a"]), heading("not-a-list")]
        );
    }

    #[test]
    fn bullet_with_bold_lead_stays_list_item() {
        // Only a line that itself opens with `**` is a heading.
        assert_eq!(
            format_note("* **not-heading").blocks,
            vec![list(&["**not-heading"])]
        );
    }

    #[test]
    fn heading_strips_every_asterisk() {
        assert_eq!(
            format_note("**Title** and *emphasis*").blocks,
            vec![heading("Title and emphasis")]
        );
    }

    #[test]
    fn list_item_strips_only_first_marker() {
        assert_eq!(
            format_note("* * nested\n*tight").blocks,
            vec![list(&["* nested", "*tight"])]
        );
    }

    #[test]
    fn heading_mid_list_closes_it() {
        assert_eq!(
            format_note("* a\n**Next**\n* b").blocks,
            vec![list(&["a"]), heading("Next"), list(&["b"])]
        );
    }

    #[test]
    fn paragraph_mid_list_closes_it() {
        assert_eq!(
            format_note("* a\nbetween\n* b").blocks,
            vec![list(&["a"]), paragraph("between"), list(&["b"])]
        );
    }

    #[test]
    fn paragraph_keeps_surrounding_whitespace() {
        assert_eq!(
            format_note("  indented  ").blocks,
            vec![paragraph("  indented  ")]
        );
    }

    #[test]
    fn trailing_blank_lines_emit_nothing() {
        assert_eq!(
            format_note("**Summary**\n* point\n\n\n").blocks,
            vec![heading("Summary"), list(&["point"])]
        );
    }

    #[rstest]
    #[case("")]
    #[case("**A**\n* b\n\n* c\nd\n\n")]
    #[case("* 1\n* 2\n* 3")]
    #[case("x\n\ny\n\nz")]
    fn never_emits_more_blocks_than_lines(#[case] input: &str) {
        let first = format_note(input);
        assert!(first.blocks.len() <= input.split('\n').count());
        assert_eq!(first, format_note(input));
    }

    #[test]
    fn renders_blocks_in_order() {
        let note = format_note("**Key Ideas**\n* one\n* two\n\nClosing thought");
        assert_eq!(
            render_html(&note),
            "<h3>Key Ideas</h3><ul><li>one</li><li>two</li></ul><p>Closing thought</p>"
        );
    }

    #[test]
    fn renders_empty_note_as_empty_markup() {
        assert_eq!(render_html(&format_note("")), "");
    }
}
