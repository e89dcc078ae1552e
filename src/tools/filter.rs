/// Characters stripped from user text before it is encoded.
pub const STRIPPED: [char; 2] = [' ', '\n'];

/// Removes spaces and newlines from the text. Everything else, tabs and
/// carriage returns included, is part of the alphabet.
pub fn filter_spaces(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

#[test]
fn filter_spaces_test() {
    assert_eq!(filter_spaces("a b\nc"), "abc");
    assert_eq!(filter_spaces(" \n \n"), "");
    assert_eq!(filter_spaces("a\tb\r\n"), "a\tb\r");
}
