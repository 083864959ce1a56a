use kstring::KString;

/// Turn an underscored identifier into display text: each word
/// upper-cased at the front, words joined with spaces. This is what
/// menu labels default to when none is given.
pub fn humanize(name: &str) -> KString {
    let mut out = String::with_capacity(name.len());
    for (i, word) in name.split('_').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    KString::from_string(out)
}

#[test]
fn t_humanize() {
    assert_eq!(humanize("home").as_str(), "Home");
    assert_eq!(humanize("about_us").as_str(), "About Us");
    assert_eq!(humanize("who_we_are").as_str(), "Who We Are");
    assert_eq!(humanize("über_uns").as_str(), "Über Uns");
    assert_eq!(humanize("").as_str(), "");
}
