use comrak::{markdown_to_html, Options};

// Raw HTML passes through, bare URLs become links, quotes and dashes are made
// typographic.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    options.parse.smart = true;
    options.render.unsafe_ = true;

    markdown_to_html(markdown, &options)
}
