//! Stylesheets as ordered selector/declaration lists.
//!
//! No cascade resolution happens here: concatenating sheets keeps every rule,
//! duplicates included, in append order.

use std::fmt::Write;

/// One selector with its declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<String>,
}

/// Ordered list of CSS rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    ///
    /// ```
    /// use cotalk_deck::Stylesheet;
    ///
    /// let mut css = Stylesheet::new();
    /// css.style("body", ["margin:0"]);
    /// assert_eq!(css.to_css(), "body{margin:0}\n");
    /// ```
    pub fn style<I, S>(&mut self, selector: impl Into<String>, declarations: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(Rule {
            selector: selector.into(),
            declarations: declarations.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append every rule of `other` after the rules already present.
    pub fn append(&mut self, other: &Stylesheet) -> &mut Self {
        self.rules.extend(other.rules.iter().cloned());
        self
    }

    /// Concatenate sheets in order.
    pub fn concat<'a>(sheets: impl IntoIterator<Item = &'a Stylesheet>) -> Stylesheet {
        let mut all = Stylesheet::new();
        for sheet in sheets {
            all.append(sheet);
        }
        all
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serialize as `selector{decl;decl}` lines.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let _ = writeln!(out, "{}{{{}}}", rule.selector, rule.declarations.join(";"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rule_serialization() {
        let mut css = Stylesheet::new();
        css.style(".slide nav ul", ["list-style-type: none", "margin: 0 0"]);
        assert_eq!(css.to_css(), ".slide nav ul{list-style-type: none;margin: 0 0}\n");
    }

    #[test]
    fn test_rule_without_declarations() {
        let mut css = Stylesheet::new();
        css.style("p", Vec::<String>::new());
        assert_eq!(css.to_css(), "p{}\n");
    }

    #[test]
    fn test_concat_preserves_order_and_duplicates() {
        let mut first = Stylesheet::new();
        first.style("p", ["color: red"]);
        let mut second = Stylesheet::new();
        second.style("p", ["color: blue"]).style("h1", ["margin: 0"]);

        let all = Stylesheet::concat([&first, &second]);

        assert_eq!(all.rules().len(), 3);
        assert_eq!(all.to_css(), "p{color: red}\np{color: blue}\nh1{margin: 0}\n");
    }

    #[test]
    fn test_concat_empty() {
        assert!(Stylesheet::concat(Vec::<&Stylesheet>::new()).is_empty());
    }
}
