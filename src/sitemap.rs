use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a urlset document: one `url > loc` per URL, input order.
///
/// quick-xml escapes the text content (`&` → `&amp;` etc.), which sits on
/// top of the percent-encoding already baked into each URL. The layers are
/// independent: `%26` inside a URL stays `%26`, a bare `&` query separator
/// becomes `&amp;`.
pub fn render(urls: &[String]) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(url)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(out)
}

/// Render and overwrite `path` wholly. No partial or incremental writes.
pub fn write_file(path: &Path, urls: &[String]) -> Result<()> {
    let doc = render(urls)?;
    fs::write(path, doc).with_context(|| format!("Failed to write {}", path.display()))
}
