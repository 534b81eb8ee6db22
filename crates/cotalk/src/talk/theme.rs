//! Stylesheets for the talk.

use cotalk_deck::Stylesheet;

/// Base theme: centered slides, bottom navigation, light source blocks.
pub(crate) fn oldstyle() -> Stylesheet {
    let mut css = Stylesheet::new();
    css.style("html, body", ["margin: 0 0", "padding: 0 0"]);
    css.style(
        ".slide",
        [
            "padding: 10px 20%",
            "text-align: center",
            "height: calc( 100vh - 50px)",
        ],
    );
    css.style("p, pre", ["text-align: left"]);
    css.style(".slide ul", ["text-align: left"]);

    // navbar
    css.style(".slide nav", ["text-align: center"]);
    css.style(
        ".slide nav ul",
        [
            "list-style-type: none",
            "margin: 0 0",
            "padding: 0 0",
            "text-align: center",
        ],
    );
    css.style(
        "nav ul li",
        ["margin: 0 4px", "cursor: pointer", "display: inline"],
    );
    css.style("nav ul li.current", ["text-decoration: underline"]);
    css.style(
        "nav",
        [
            "float: left",
            "clear: both",
            "width: 100%",
            "display: block",
            "margin-top: 1em",
            "text-align: center",
        ],
    );
    css.style(
        "nav a:link, nav a:visited",
        [
            "color: #727272",
            "padding: 0 5px",
            "margin: 0 2px",
            "text-decoration: none",
        ],
    );
    css.style(
        "nav li.current a, nav a:hover",
        ["color: black", "border-bottom: 1px solid black"],
    );

    css.style(
        "a:link, a:visited",
        ["color: #b7410e", "text-decoration: none"],
    );
    css.style("a:hover", ["text-decoration: underline"]);
    css.style("h1, h2, h3", ["text-align: center"]);

    // source and shell blocks
    css.style(
        ".srcfile",
        [
            "margin-top: 1.6em",
            "margin-bottom: 1.6em",
            "padding-left: 36px",
            "background-color: #fafafa",
            "tab-size: 4",
            "-moz-tab-size: 4",
        ],
    );
    css.style(
        ".srcfile code",
        [
            "padding: .6em 0 .6em 0",
            "display: block",
            "text-align: left",
        ],
    );
    css.style(".shell", ["padding: 1em", "border-radius: 10px"]);
    css.style(".dark", ["background-color: #2e2e34", "color: aliceblue"]);
    css.style(".light", ["background-color: #ffffff", "color: #3b2616"]);

    css.style(
        ".group",
        ["float: left", "text-align: left", "margin-right: 3em"],
    );
    css
}

/// Colours for code and captured output.
pub(crate) fn code_colors() -> Stylesheet {
    let mut css = Stylesheet::new();
    css.style(".srcfile code", ["color: #1f1f1f", "font-size: 0.95em"]);
    css.style(".shell b", ["color: #8ae234"]);
    css.style(".shell i", ["color: #fce94f", "font-style: normal"]);
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldstyle_marks_current_nav_entry() {
        let css = oldstyle().to_css();
        assert!(css.contains("nav ul li.current{text-decoration: underline}"));
        assert!(css.starts_with("html, body{margin: 0 0;padding: 0 0}\n"));
    }

    #[test]
    fn test_code_colors_follow_theme() {
        let css = Stylesheet::concat([&oldstyle(), &code_colors()]).to_css();
        let theme = css.find(".srcfile code{padding").unwrap();
        let colors = css.find(".srcfile code{color").unwrap();
        assert!(theme < colors);
    }
}
