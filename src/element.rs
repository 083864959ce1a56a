//! The little bit of HTML serialization the menu code needs:
//! attribute maps and container tags, escaped on the way out.

use std::borrow::Cow;

use kstring::KString;

use crate::{class_list::ClassList, myfrom::MyFrom};

pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// The rendering attributes of one element. `id` and `class` are kept
/// apart since the menu code composes them (id chains, computed
/// classes); anything else is passed through untouched, first set
/// wins the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
    id: Option<KString>,
    classes: ClassList,
    rest: Vec<(KString, KString)>,
}

impl HtmlAttrs {
    pub fn new() -> HtmlAttrs {
        HtmlAttrs::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> HtmlAttrs {
        let mut attrs = HtmlAttrs::new();
        for (key, value) in pairs {
            attrs.set(key, value);
        }
        attrs
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "id" => self.id = Some(KString::from_ref(value)),
            "class" => {
                for token in value.split_ascii_whitespace() {
                    self.classes.add(token);
                }
            }
            _ => {
                if let Some(slot) = self.rest.iter_mut().find(|(k, _)| k.as_str() == key) {
                    slot.1 = KString::from_ref(value);
                } else {
                    self.rest.push((KString::from_ref(key), KString::from_ref(value)));
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<KString> {
        match key {
            "id" => self.id.clone(),
            "class" => {
                if self.classes.is_empty() {
                    None
                } else {
                    Some(self.classes.to_attribute())
                }
            }
            _ => self.rest.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.clone()),
        }
    }

    pub fn id(&self) -> Option<&KString> {
        self.id.as_ref()
    }

    pub fn set_id<T>(&mut self, id: T)
    where KString: MyFrom<T>
    {
        self.id = Some(KString::myfrom(id));
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn add_class<T>(&mut self, token: T)
    where KString: MyFrom<T>
    {
        self.classes.add(token);
    }

    /// Serialize, with a leading space before each attribute.
    /// Attributes are emitted sorted by name so output is stable no
    /// matter how the map was built up.
    pub(crate) fn write(&self, out: &mut String) {
        let mut pairs: Vec<(&str, KString)> = Vec::new();
        if !self.classes.is_empty() {
            pairs.push(("class", self.classes.to_attribute()));
        }
        if let Some(id) = &self.id {
            pairs.push(("id", id.clone()));
        }
        for (key, value) in &self.rest {
            pairs.push((key.as_str(), value.clone()));
        }
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in pairs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&html_escape(&value));
            out.push('"');
        }
    }
}

/// `<tag ..attrs..>body</tag>`. `body` must already be serialized
/// HTML (escape text before passing it in).
pub fn content_tag(tag: &str, attrs: &HtmlAttrs, body: &str) -> String {
    let mut out = String::with_capacity(2 * tag.len() + body.len() + 16);
    out.push('<');
    out.push_str(tag);
    attrs.write(&mut out);
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// `<a href="..">body</a>`; `body` already serialized, `href` escaped
/// like any attribute value.
pub fn link_to(body: &str, href: &str) -> String {
    let mut attrs = HtmlAttrs::new();
    attrs.set("href", href);
    content_tag("a", &attrs, body)
}
